use url::Url;

/// How a single raw href was turned into an absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// RFC 3986 resolution against the base URL succeeded
    Standard(String),
    /// Manual string-join fallback was applied
    Joined(String),
}

impl Resolved {
    /// The resolved URL string, regardless of which path produced it
    pub fn into_inner(self) -> String {
        match self {
            Resolved::Standard(url) => url,
            Resolved::Joined(url) => url,
        }
    }
}

/// Normalizes the first `max_links` raw hrefs against `base_url`.
///
/// Order is preserved and nothing is deduplicated; the cap exists to
/// bound crawl fan-out per page. This stage cannot fail: hrefs the
/// strict resolver rejects go through the string-join fallback, so the
/// worst case output is a malformed-but-non-empty URL string. No
/// network access, no reachability checks.
pub fn normalize_links(base_url: &str, raw_links: &[String], max_links: usize) -> Vec<String> {
    ::log::debug!(
        "Normalizing {} of {} raw links against {}",
        raw_links.len().min(max_links),
        raw_links.len(),
        base_url
    );

    raw_links
        .iter()
        .take(max_links)
        .map(|link| resolve_link(base_url, link).into_inner())
        .collect()
}

/// Resolves one href against the base, tagging which path was taken
pub fn resolve_link(base_url: &str, link: &str) -> Resolved {
    match Url::parse(base_url).and_then(|base| base.join(link)) {
        Ok(url) => Resolved::Standard(url.to_string()),
        Err(e) => {
            ::log::warn!(
                "Standard resolution failed for {:?} against {:?} ({}), using string join",
                link,
                base_url,
                e
            );
            Resolved::Joined(join_fallback(base_url, link))
        }
    }
}

/// Manual string-join resolution: base gets exactly one trailing slash,
/// the link loses a single leading slash, then the two are concatenated.
/// Always returns a string.
fn join_fallback(base_url: &str, link: &str) -> String {
    let mut safe_base = base_url.to_string();
    if !safe_base.ends_with('/') {
        safe_base.push('/');
    }

    let safe_link = link.strip_prefix('/').unwrap_or(link);

    format!("{}{}", safe_base, safe_link)
}
