use clap::Parser;
use page_ingest::{PageJob, Pipeline};
use std::error::Error;
use std::fs;

mod args;
use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Loading page job from {}", args.job_file);
    let job: PageJob = serde_json::from_str(&fs::read_to_string(&args.job_file)?)?;

    // Build the pipeline, applying configuration in precedence order:
    // file, then string, then individual overrides
    let mut pipeline = Pipeline::new();

    if let Some(config_file) = &args.config_file {
        ::log::info!("Loading configuration from file: {}", config_file);
        pipeline = pipeline.with_config_file(config_file)?;
    }

    if let Some(config_str) = &args.config {
        ::log::info!("Applying configuration from string");
        pipeline = pipeline.with_config_str(config_str)?;
    }

    if let Some(max_links) = args.max_links {
        ::log::info!("Overriding max links: {}", max_links);
        pipeline = pipeline.with_max_links(max_links);
    }

    // Run every stage the job has inputs for
    let start_time = std::time::Instant::now();
    let output = pipeline.run(&job);

    ::log::info!(
        "Pipeline complete for {} - {} links, {} chars consolidated, {} records in {:.2}ms",
        job.url,
        output.links.len(),
        output.document.full_content.len(),
        output.records.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    // Emit the output for the downstream collaborators: the links feed
    // the crawler, the records feed the vector store
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }

    Ok(())
}
