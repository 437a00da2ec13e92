use crate::results::{ConsolidatedDocument, SubpageResult};
use crate::utils::truncate_for_log;

/// Substituted for `full_content` when no usable text was found, so the
/// downstream segmentation stage always receives a document
pub const NO_TEXT_WARNING: &str =
    "WARNING: No text found. Please check variable names in the Input panel.";

/// Section header for the base page's own text
const MAIN_PAGE_HEADER: &str = "=== MAIN PAGE CONTENT ===";

/// Section header label for sub-pages that reported no URL
const GENERIC_SUBPAGE_LABEL: &str = "Generic Subpage";

/// Accessors for the text payload, in priority order: upstream
/// producers disagree on the field name, and the first populated
/// candidate wins.
const TEXT_ACCESSORS: [fn(&SubpageResult) -> Option<&str>; 4] = [
    |item| item.subpage_text.as_deref(),
    |item| item.page_text.as_deref(),
    |item| item.body.as_deref(),
    |item| item.text.as_deref(),
];

/// Merges the base page's text and its sub-page results into exactly
/// one [`ConsolidatedDocument`].
///
/// Sections are emitted in input order; a sub-page only contributes if
/// its resolved text is longer than `min_content_len` characters. The
/// document's `source_url` prefers the first item's URL, then
/// `default_url` (the page job's own URL), then the empty string. This
/// stage cannot fail and never returns an absent document: when nothing
/// usable was found, `full_content` is [`NO_TEXT_WARNING`].
pub fn consolidate(
    items: &[SubpageResult],
    default_url: Option<&str>,
    min_content_len: usize,
) -> ConsolidatedDocument {
    let mut combined = String::new();

    // The base page's own text, forwarded on the first item, goes first
    if let Some(parent_text) = items.first().and_then(|item| item.parent_text.as_deref()) {
        combined.push_str(MAIN_PAGE_HEADER);
        combined.push('\n');
        combined.push_str(parent_text);
        combined.push_str("\n\n");
    }

    for item in items {
        let content = resolve_text(item).unwrap_or("");

        // Noise filter against near-empty scrapes (loader stubs, error pages)
        if content.chars().count() <= min_content_len {
            ::log::debug!(
                "Skipping sub-page {:?}: resolved text too short ({:?})",
                item.url.as_deref().unwrap_or(GENERIC_SUBPAGE_LABEL),
                truncate_for_log(content, 32)
            );
            continue;
        }

        let header = item.url.as_deref().unwrap_or(GENERIC_SUBPAGE_LABEL);
        combined.push_str(&format!("=== SUBPAGE: {} ===\n", header));
        combined.push_str(content);
        combined.push_str("\n\n");
    }

    let source_url = items
        .first()
        .and_then(|item| item.url.as_deref())
        .or(default_url)
        .unwrap_or("")
        .to_string();

    if combined.is_empty() {
        ::log::warn!(
            "No usable text across {} sub-page result(s) for {:?}, emitting placeholder document",
            items.len(),
            source_url
        );
    }

    let full_content = if combined.is_empty() {
        NO_TEXT_WARNING.to_string()
    } else {
        combined
    };

    ConsolidatedDocument {
        source_url,
        full_content,
    }
}

/// Resolves an item's text payload via the accessor table; `None` when
/// every candidate field is absent
pub fn resolve_text(item: &SubpageResult) -> Option<&str> {
    TEXT_ACCESSORS.iter().find_map(|accessor| accessor(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_item_with_page_text() {
        let items = vec![SubpageResult {
            url: Some("https://a.com/b".to_string()),
            page_text: Some("Hello world, this is content.".to_string()),
            ..SubpageResult::default()
        }];

        let doc = consolidate(&items, None, 10);
        assert_eq!(doc.source_url, "https://a.com/b");
        assert!(
            doc.full_content
                .contains("=== SUBPAGE: https://a.com/b ===\nHello world, this is content.")
        );
    }

    #[test]
    fn test_field_priority_subpage_text_wins() {
        let item = SubpageResult {
            subpage_text: Some("from subpage_text".to_string()),
            text: Some("from text".to_string()),
            ..SubpageResult::default()
        };
        assert_eq!(resolve_text(&item), Some("from subpage_text"));

        let item = SubpageResult {
            body: Some("from body".to_string()),
            text: Some("from text".to_string()),
            ..SubpageResult::default()
        };
        assert_eq!(resolve_text(&item), Some("from body"));
    }

    #[test]
    fn test_no_text_fields_yields_placeholder() {
        let items = vec![
            SubpageResult {
                url: Some("https://a.com/empty".to_string()),
                ..SubpageResult::default()
            },
            SubpageResult::default(),
        ];

        let doc = consolidate(&items, None, 10);
        assert_eq!(doc.full_content, NO_TEXT_WARNING);
        assert_eq!(doc.source_url, "https://a.com/empty");
    }

    #[test]
    fn test_empty_input_tolerated() {
        let doc = consolidate(&[], Some("https://job.example/"), 10);
        assert_eq!(doc.full_content, NO_TEXT_WARNING);
        assert_eq!(doc.source_url, "https://job.example/");

        // Even the default can be absent; this degrades, not crashes
        let doc = consolidate(&[], None, 10);
        assert_eq!(doc.source_url, "");
    }

    #[test]
    fn test_short_text_is_filtered() {
        let items = vec![SubpageResult::with_subpage_text(
            "https://a.com/stub",
            "loading...",
        )];

        // "loading..." is exactly 10 chars, so it does not pass the
        // strictly-greater filter
        let doc = consolidate(&items, None, 10);
        assert_eq!(doc.full_content, NO_TEXT_WARNING);
    }

    #[test]
    fn test_parent_text_emitted_first() {
        let items = vec![
            SubpageResult {
                url: Some("https://a.com/".to_string()),
                parent_text: Some("Main page body text here.".to_string()),
                ..SubpageResult::default()
            },
            SubpageResult::with_subpage_text("https://a.com/sub", "Sub-page body text here."),
        ];

        let doc = consolidate(&items, None, 10);
        let main_pos = doc.full_content.find("=== MAIN PAGE CONTENT ===").unwrap();
        let sub_pos = doc
            .full_content
            .find("=== SUBPAGE: https://a.com/sub ===")
            .unwrap();
        assert!(main_pos < sub_pos);
        assert!(doc.full_content.contains("Main page body text here.\n\n"));
    }

    #[test]
    fn test_missing_url_gets_generic_label() {
        let items = vec![SubpageResult {
            text: Some("Text from an unlabeled producer.".to_string()),
            ..SubpageResult::default()
        }];

        let doc = consolidate(&items, Some("https://job.example"), 10);
        assert!(
            doc.full_content
                .contains("=== SUBPAGE: Generic Subpage ===")
        );
        assert_eq!(doc.source_url, "https://job.example");
    }

    #[test]
    fn test_sections_keep_input_order() {
        let items = vec![
            SubpageResult::with_subpage_text("https://a.com/1", "First sub-page content."),
            SubpageResult::with_subpage_text("https://a.com/2", "Second sub-page content."),
        ];

        let doc = consolidate(&items, None, 10);
        let first = doc.full_content.find("https://a.com/1").unwrap();
        let second = doc.full_content.find("https://a.com/2").unwrap();
        assert!(first < second);
    }
}
