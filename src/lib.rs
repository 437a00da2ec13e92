// Re-export modules
pub mod config;
pub mod embedding;
pub mod results;
pub mod stages;
pub mod utils;

// Re-export commonly used types for convenience
pub use results::{ChunkRecord, ConsolidatedDocument, SubpageResult};
pub use stages::records::LoopContext;

use config::PipelineConfig;
use serde::{Deserialize, Serialize};

/// One unit of crawl work, with every external input already resolved.
///
/// The crawler, the segmentation model and the vector store are
/// collaborators of the surrounding orchestrator; a `PageJob` snapshots
/// what they delivered so the pipeline itself stays a pure
/// transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageJob {
    /// URL of the page this job is about
    pub url: String,

    /// Raw hrefs extracted from the page (may be relative or malformed)
    #[serde(default)]
    pub links: Vec<String>,

    /// Fetched sub-page results from the crawler
    #[serde(default)]
    pub items: Vec<SubpageResult>,

    /// The segmentation model's output for the consolidated document,
    /// when that step has already run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segmentation_output: Option<String>,
}

/// Everything the pipeline produced for one page job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Absolute sub-page URLs for the crawler to fetch
    pub links: Vec<String>,

    /// The consolidated document handed to the segmentation step
    pub document: ConsolidatedDocument,

    /// Records ready for the vector store (empty when the job carried
    /// no segmentation output yet)
    pub records: Vec<ChunkRecord>,
}

/// Builder for running the ingestion stages over page jobs
pub struct Pipeline {
    config: PipelineConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a pipeline with default configuration
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = PipelineConfig::from_file(path)?;
        Ok(self)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = PipelineConfig::from_json(json)?;
        Ok(self)
    }

    /// Override the crawl fan-out cap
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.config.max_links = max_links;
        self
    }

    /// The active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Stage 1: normalize a job's raw hrefs into absolute URLs for the
    /// crawler to fetch
    pub fn normalize_links(&self, job: &PageJob) -> Vec<String> {
        stages::normalize_links(&job.url, &job.links, self.config.max_links)
    }

    /// Stage 2: merge the crawler's sub-page results into one document,
    /// falling back to the job URL for the document identity
    pub fn consolidate(&self, job: &PageJob) -> ConsolidatedDocument {
        stages::consolidate(&job.items, Some(&job.url), self.config.min_content_len)
    }

    /// Stage 3: assemble persistable records from the segmentation
    /// step's output
    pub fn assemble_records(&self, job: &PageJob, segmentation_output: &str) -> Vec<ChunkRecord> {
        let ctx = LoopContext::for_url(&job.url);
        stages::assemble_records(&ctx, segmentation_output, &self.config)
    }

    /// Run every stage the job has inputs for.
    ///
    /// Links and the consolidated document are always produced; records
    /// require the job to carry the segmentation output (that step is
    /// an external collaborator, so a job snapshotted before it ran
    /// yields no records yet).
    pub fn run(&self, job: &PageJob) -> PipelineOutput {
        ::log::info!("Running pipeline for page job: {}", job.url);

        let links = self.normalize_links(job);
        let document = self.consolidate(job);

        let records = match job.segmentation_output.as_deref() {
            Some(output) => self.assemble_records(job, output),
            None => {
                ::log::debug!("Job {} has no segmentation output yet", job.url);
                Vec::new()
            }
        };

        PipelineOutput {
            links,
            document,
            records,
        }
    }
}
