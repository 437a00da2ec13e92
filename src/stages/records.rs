use crate::config::PipelineConfig;
use crate::embedding::placeholder_embedding;
use crate::results::{ChunkMetadata, ChunkRecord};
use crate::utils::{strip_trailing_slash, truncate_for_log};
use chrono::{SecondsFormat, Utc};
use regex::Regex;

/// Sentinel stored when the current loop URL could not be resolved
pub const URL_NOT_FOUND: &str = "URL_NOT_FOUND";

/// Fence markers the segmentation model wraps its output in
const FENCE_PATTERN: &str = r"```json|```";

/// The page currently being processed by the orchestrator's loop,
/// passed in explicitly rather than looked up from ambient state
#[derive(Debug, Clone, Default)]
pub struct LoopContext {
    /// URL of the current loop item, if the orchestrator supplied one
    pub url: Option<String>,
}

impl LoopContext {
    /// Context for a known page URL
    pub fn for_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
        }
    }
}

/// How the segmentation output was split into chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkSplit {
    /// Output parsed as a JSON list of chunk strings
    Parsed(Vec<String>),
    /// Output did not parse; the whole cleaned text is one chunk
    Raw(String),
}

impl ChunkSplit {
    /// The chunk texts, regardless of which path produced them
    pub fn into_chunks(self) -> Vec<String> {
        match self {
            ChunkSplit::Parsed(chunks) => chunks,
            ChunkSplit::Raw(text) => vec![text],
        }
    }
}

/// Turns the segmentation step's output into persistable records.
///
/// One [`ChunkRecord`] per chunk, in input order, each carrying the
/// canonical source URL, its index and the chunk count, the placeholder
/// embedding and processing metadata. This stage cannot fail: malformed
/// segmentation output degrades to a single chunk, and a missing loop
/// URL degrades to the [`URL_NOT_FOUND`] sentinel.
pub fn assemble_records(
    ctx: &LoopContext,
    segmentation_output: &str,
    config: &PipelineConfig,
) -> Vec<ChunkRecord> {
    let chunks = split_chunks(segmentation_output).into_chunks();
    let source_url = resolve_source_url(ctx);

    ::log::info!(
        "Assembling {} chunk record(s) for {}",
        chunks.len(),
        source_url
    );

    let total_chunks = chunks.len();
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    chunks
        .into_iter()
        .enumerate()
        .map(|(chunk_index, chunk_text)| ChunkRecord {
            source_url: source_url.clone(),
            chunk_text,
            chunk_index,
            total_chunks,
            embedding: placeholder_embedding(config.embedding_dims, config.embedding_fill),
            metadata: ChunkMetadata {
                processed_by: config.processed_by.clone(),
                timestamp: timestamp.clone(),
            },
        })
        .collect()
}

/// Cleans fence decoration and parses the output as a JSON list of
/// chunk strings, degrading to a single raw chunk on parse failure
pub fn split_chunks(segmentation_output: &str) -> ChunkSplit {
    let cleaned = clean_fences(segmentation_output);

    match serde_json::from_str::<Vec<String>>(&cleaned) {
        Ok(chunks) => ChunkSplit::Parsed(chunks),
        Err(e) => {
            ::log::warn!(
                "Segmentation output is not a JSON list ({}), treating as one chunk: {:?}",
                e,
                truncate_for_log(&cleaned, 64)
            );
            ChunkSplit::Raw(cleaned)
        }
    }
}

/// Strips Markdown code-fence markers unconditionally before parsing.
/// The segmentation model frequently wraps its JSON in ```json fences.
fn clean_fences(text: &str) -> String {
    let fence = Regex::new(FENCE_PATTERN).expect("Fence pattern should be valid");
    fence.replace_all(text, "").trim().to_string()
}

/// Canonical source URL for the records: the current loop URL with its
/// trailing slash stripped, or the sentinel when the lookup failed
fn resolve_source_url(ctx: &LoopContext) -> String {
    match ctx.url.as_deref() {
        Some(url) => strip_trailing_slash(url).to_string(),
        None => {
            ::log::warn!("No current loop URL available, using {}", URL_NOT_FOUND);
            URL_NOT_FOUND.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_list_yields_indexed_records() {
        let ctx = LoopContext::for_url("https://a.com/b");
        let output = r#"["first chunk", "second chunk", "third chunk"]"#;
        let records = assemble_records(&ctx, output, &PipelineConfig::default());

        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.chunk_index, i);
            assert_eq!(record.total_chunks, 3);
            assert_eq!(record.source_url, "https://a.com/b");
        }
        assert_eq!(records[1].chunk_text, "second chunk");
    }

    #[test]
    fn test_fenced_output_is_cleaned_before_parsing() {
        let output = "```json\n[\"only chunk\"]\n```";
        assert_eq!(
            split_chunks(output),
            ChunkSplit::Parsed(vec!["only chunk".to_string()])
        );
    }

    #[test]
    fn test_malformed_output_degrades_to_single_chunk() {
        let ctx = LoopContext::for_url("https://a.com/b");
        let records = assemble_records(&ctx, "not json", &PipelineConfig::default());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chunk_index, 0);
        assert_eq!(records[0].total_chunks, 1);
        assert_eq!(records[0].chunk_text, "not json");
    }

    #[test]
    fn test_fenced_but_malformed_output_keeps_cleaned_text() {
        let records = assemble_records(
            &LoopContext::for_url("https://a.com"),
            "```json\nnot a list at all\n```",
            &PipelineConfig::default(),
        );
        assert_eq!(records[0].chunk_text, "not a list at all");
    }

    #[test]
    fn test_missing_loop_url_uses_sentinel() {
        let records = assemble_records(
            &LoopContext::default(),
            r#"["chunk"]"#,
            &PipelineConfig::default(),
        );
        assert_eq!(records[0].source_url, URL_NOT_FOUND);
    }

    #[test]
    fn test_trailing_slash_stripped_from_source_url() {
        let records = assemble_records(
            &LoopContext::for_url("https://a.com/b/"),
            r#"["chunk"]"#,
            &PipelineConfig::default(),
        );
        assert_eq!(records[0].source_url, "https://a.com/b");
    }

    #[test]
    fn test_placeholder_embedding_attached() {
        let records = assemble_records(
            &LoopContext::for_url("https://a.com"),
            r#"["chunk"]"#,
            &PipelineConfig::default(),
        );

        let embedding = &records[0].embedding;
        assert_eq!(embedding.len(), 1536);
        assert!(embedding.iter().all(|&v| v == 0.0123));
        assert_eq!(records[0].metadata.processed_by, "Gemini 2.0 Flash");
        // RFC 3339 UTC timestamp
        assert!(records[0].metadata.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_empty_parsed_list_yields_no_records() {
        let records = assemble_records(
            &LoopContext::for_url("https://a.com"),
            "[]",
            &PipelineConfig::default(),
        );
        assert!(records.is_empty());
    }
}
