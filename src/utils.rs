/// Strip a single trailing slash from a URL string.
///
/// Used for canonical identity comparisons against stored source URLs;
/// the root slash of a bare scheme prefix is left alone.
pub fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Truncate a string for log output, appending an ellipsis when cut
pub fn truncate_for_log(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}
