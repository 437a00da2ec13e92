use serde::{Deserialize, Serialize};

/// One fetched sub-page as delivered by the upstream crawler/renderer.
///
/// Different producers name the scraped text differently (browser
/// renderers tend to emit `body`, simpler fetchers `page_text` or
/// `text`), so every candidate field is optional and resolution happens
/// downstream in the consolidator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubpageResult {
    /// URL of the sub-page (if the producer reported one)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Text of the parent page, forwarded on the first item only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_text: Option<String>,

    /// Scraped text under its preferred name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpage_text: Option<String>,

    /// Scraped text as emitted by plain page fetchers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_text: Option<String>,

    /// Scraped text as emitted by browser renderers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Scraped text under the most generic name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// The single document produced from a page and its sub-pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedDocument {
    /// Canonical identity of the page this document was built from
    pub source_url: String,

    /// Labeled sections in input order; never empty (a warning
    /// placeholder is substituted when no usable text was found)
    pub full_content: String,
}

/// Processing metadata attached to every persisted chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Label of the model that segmented the document
    pub processed_by: String,

    /// RFC 3339 capture time of the record
    pub timestamp: String,
}

/// The persisted unit: one row per chunk in the vector store.
///
/// Field names are the store's column names; the store rejects rows
/// without a fixed-length `embedding`, which is why the placeholder
/// vector is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// URL of the page the chunk was derived from
    pub source_url: String,

    /// Text of this chunk
    pub chunk_text: String,

    /// 0-based position of the chunk within its document
    pub chunk_index: usize,

    /// Number of chunks derived from the same document
    pub total_chunks: usize,

    /// Fixed-length embedding vector (currently a placeholder, see
    /// `crate::embedding`)
    pub embedding: Vec<f32>,

    /// Processing metadata
    pub metadata: ChunkMetadata,
}

impl SubpageResult {
    /// Create a result carrying only a URL and a `subpage_text` payload
    pub fn with_subpage_text(url: &str, text: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            subpage_text: Some(text.to_string()),
            ..Self::default()
        }
    }
}
