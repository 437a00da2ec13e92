use clap::Parser;
use page_ingest::{PageJob, Pipeline, SubpageResult};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page job
    #[arg(short, long)]
    url: String,

    /// JSON configuration string
    #[arg(short, long)]
    config: Option<String>,

    /// Path to JSON configuration file
    #[arg(long)]
    config_file: Option<String>,

    /// Maximum number of links to follow
    #[arg(short, long)]
    max_links: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    println!("Building pipeline for page job: {}", args.url);

    let mut pipeline = Pipeline::new();

    // Apply configuration from file if specified
    if let Some(config_file) = args.config_file {
        println!("Loading configuration from file: {}", config_file);
        pipeline = pipeline.with_config_file(config_file)?;
    }

    // Apply configuration from string if specified (overrides file config)
    if let Some(config_str) = args.config {
        println!("Applying configuration from string");
        pipeline = pipeline.with_config_str(&config_str)?;
    }

    // Apply command-line overrides
    if let Some(max_links) = args.max_links {
        println!("Overriding max links: {}", max_links);
        pipeline = pipeline.with_max_links(max_links);
    }

    // A canned job snapshot standing in for the external crawler and
    // segmentation collaborators
    let job = PageJob {
        url: args.url.clone(),
        links: vec![
            "/getting-started".to_string(),
            "reference".to_string(),
            "https://other.example/cross-link".to_string(),
        ],
        items: vec![
            SubpageResult {
                url: Some(args.url.clone()),
                parent_text: Some("Welcome to the documentation portal.".to_string()),
                page_text: Some("This page links to every guide we publish.".to_string()),
                ..SubpageResult::default()
            },
            SubpageResult::with_subpage_text(
                "https://other.example/cross-link",
                "Cross-linked reference material lives here.",
            ),
        ],
        segmentation_output: Some(
            "```json\n[\"Welcome to the documentation portal.\", \
             \"Cross-linked reference material lives here.\"]\n```"
                .to_string(),
        ),
    };

    let start_time = std::time::Instant::now();
    let output = pipeline.run(&job);

    println!("Normalized links:");
    for link in &output.links {
        println!("  {}", link);
    }

    println!(
        "Consolidated {} chars from {}",
        output.document.full_content.len(),
        output.document.source_url
    );

    for record in &output.records {
        println!(
            "Record {}/{}: {:?} ({} dims)",
            record.chunk_index + 1,
            record.total_chunks,
            record.chunk_text,
            record.embedding.len()
        );
    }

    println!(
        "Pipeline complete in {:.2}ms.",
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
