use clap::Parser;
use page_ingest::config::PipelineConfig;
use page_ingest::{PageJob, Pipeline};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to pipeline configuration file
    #[arg(short, long)]
    config: String,

    /// Path to a page job JSON snapshot
    #[arg(short, long)]
    job: String,

    /// Override max links
    #[arg(short, long)]
    max_links: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = PipelineConfig::from_file(config_path)?;

    // Print the loaded configuration (for debugging)
    println!("Pipeline configuration:");
    println!("  Max links: {}", config.max_links);
    println!("  Min content length: {}", config.min_content_len);
    println!("  Embedding dims: {}", config.embedding_dims);
    println!("  Processed by: {}", config.processed_by);

    // Load the page job snapshot
    let job: PageJob = serde_json::from_str(&fs::read_to_string(&args.job)?)?;
    println!("Loaded page job for: {}", job.url);
    println!("  Raw links: {}", job.links.len());
    println!("  Sub-page results: {}", job.items.len());
    println!(
        "  Segmentation output present: {}",
        job.segmentation_output.is_some()
    );

    // Create the pipeline with the configuration
    let mut pipeline = Pipeline::new().with_config(config);

    // Apply overrides if specified
    if let Some(max_links) = args.max_links {
        println!("Overriding max links: {}", max_links);
        pipeline = pipeline.with_max_links(max_links);
    }

    // Run the pipeline
    let start_time = std::time::Instant::now();
    let output = pipeline.run(&job);

    println!(
        "Pipeline produced {} links, one document, {} records.",
        output.links.len(),
        output.records.len()
    );
    println!("{}", serde_json::to_string_pretty(&output)?);

    let duration = start_time.elapsed();
    println!(
        "Processing complete in {:.2} seconds.",
        duration.as_secs_f64()
    );

    Ok(())
}
