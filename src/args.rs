use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "page-ingest")]
#[command(about = "Runs the crawl-to-chunk ingestion stages over a page job snapshot")]
#[command(version)]
pub struct Args {
    /// Path to a page job JSON file (url, links, items, segmentation_output)
    pub job_file: String,

    /// JSON configuration string
    #[arg(short, long)]
    pub config: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config_file: Option<String>,

    /// Override the crawl fan-out cap
    #[arg(short, long)]
    pub max_links: Option<usize>,

    /// Pretty-print the pipeline output instead of one JSON line
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,
}
