use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Maximum number of in-page links to follow per page job
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Minimum resolved text length for a sub-page to contribute a
    /// section (filters loader stubs and error pages)
    #[serde(default = "default_min_content_len")]
    pub min_content_len: usize,

    /// Dimensionality of the embedding vector the store expects
    #[serde(default = "default_embedding_dims")]
    pub embedding_dims: usize,

    /// Component value used for the placeholder embedding
    #[serde(default = "default_embedding_fill")]
    pub embedding_fill: f32,

    /// Label of the model that performs segmentation, recorded in
    /// chunk metadata
    #[serde(default = "default_processed_by")]
    pub processed_by: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_links: default_max_links(),
            min_content_len: default_min_content_len(),
            embedding_dims: default_embedding_dims(),
            embedding_fill: default_embedding_fill(),
            processed_by: default_processed_by(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default crawl fan-out cap per page
fn default_max_links() -> usize {
    10
}

/// Default noise filter threshold for sub-page text
fn default_min_content_len() -> usize {
    10
}

/// Default embedding dimensionality (the store's schema size)
fn default_embedding_dims() -> usize {
    1536
}

/// Default placeholder embedding component
fn default_embedding_fill() -> f32 {
    0.0123
}

/// Default processing-model label
fn default_processed_by() -> String {
    "Gemini 2.0 Flash".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_links, 10);
        assert_eq!(config.min_content_len, 10);
        assert_eq!(config.embedding_dims, 1536);
        assert_eq!(config.embedding_fill, 0.0123);
        assert_eq!(config.processed_by, "Gemini 2.0 Flash");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PipelineConfig::from_json(r#"{"max_links": 3}"#).unwrap();
        assert_eq!(config.max_links, 3);
        assert_eq!(config.embedding_dims, 1536);
        assert_eq!(config.processed_by, "Gemini 2.0 Flash");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PipelineConfig::from_json("not json").is_err());
    }
}
