//! URL utilities for link resolution, normalization, and origin checks.
//!
//! All operations are best-effort: a URL that fails to parse is passed
//! through unchanged rather than rejected, so malformed hrefs degrade to
//! plain text instead of aborting extraction.

use url::Url;

/// Check if a string is an absolute http(s) URL, returning the parsed form.
#[must_use]
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => Some(url),
        _ => None,
    }
}

/// Resolve a possibly-relative URL against a base, returning an absolute URL
/// string. Non-resolvable input is returned unchanged.
#[must_use]
pub fn make_absolute(href: &str, base: &str) -> String {
    let href = href.trim();

    if href.is_empty() {
        return String::new();
    }

    // Non-navigable schemes are preserved unchanged
    if href.starts_with("data:")
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
    {
        return href.to_string();
    }

    if parse_absolute_url(href).is_some() {
        return href.to_string();
    }

    let Some(base_url) = parse_absolute_url(base) else {
        return href.to_string();
    };

    match base_url.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Normalize a URL for deduplication: drop the fragment and strip a single
/// trailing slash from multi-segment paths. Parse failures return the input
/// unchanged.
#[must_use]
pub fn normalize_url(url_str: &str) -> String {
    let Some(mut url) = parse_absolute_url(url_str) else {
        return url_str.to_string();
    };

    url.set_fragment(None);

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(&path[..path.len() - 1]);
    }

    url.to_string()
}

/// Check if two URLs point to the same page after normalization.
#[must_use]
pub fn urls_match(url1: &str, url2: &str) -> bool {
    normalize_url(url1) == normalize_url(url2)
}

/// Check if a URL shares the scheme and host of another.
///
/// Unparseable input on either side means the origin cannot be established,
/// so the answer is `false`.
#[must_use]
pub fn same_origin(url_str: &str, other: &str) -> bool {
    match (parse_absolute_url(url_str), parse_absolute_url(other)) {
        (Some(a), Some(b)) => a.scheme() == b.scheme() && a.host_str() == b.host_str(),
        _ => false,
    }
}

/// Check if a raw href carries a fragment identifier.
#[must_use]
pub fn has_fragment(href: &str) -> bool {
    href.contains('#')
}

/// Check if a URL's path ends in one of the given file extensions
/// (case-insensitive, query and fragment ignored).
#[must_use]
pub fn has_extension(url_str: &str, extensions: &[&str]) -> bool {
    let path = match parse_absolute_url(url_str) {
        Some(url) => url.path().to_string(),
        None => {
            let trimmed = url_str.split(['?', '#']).next().unwrap_or(url_str);
            trimmed.to_string()
        }
    };

    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_lowercase();
    extensions.contains(&ext.as_str())
}
