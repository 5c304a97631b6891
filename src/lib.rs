//! # docsift
//!
//! Extracts the main content of a web document as clean Markdown and
//! discovers sibling documentation pages referenced from navigation regions.
//!
//! The engine is a pure function of an already-parsed document tree: it
//! locates the content region through a cascade of structural idioms and
//! density scoring, converts that region to Markdown (headings, lists,
//! tables, links, images, fenced code with language hints), and
//! independently harvests same-origin sibling-page links from sidebars and
//! navigation landmarks. It performs no I/O and never mutates the tree it
//! is given.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsift::extract_html;
//!
//! let html = r#"<html><head><title>Guide</title></head>
//! <body><main><h1>Install</h1><p>Run the installer.</p></main></body></html>"#;
//!
//! let doc = extract_html(html, "https://docs.example.com/guide");
//! assert_eq!(doc.title, "Install");
//! assert!(doc.content.contains("# Install"));
//! ```
//!
//! ## Pieces
//!
//! - **Content region selection**: semantic landmarks, documentation-
//!   generator idioms, then a word/paragraph/heading density score, with the
//!   document body as terminal fallback so selection never fails.
//! - **Markdown rendering**: per-tag recursive synthesis over a render-scoped
//!   clone, with ordered heading and code-block side collections.
//! - **Navigation harvesting**: sidebar idioms, generic landmarks, and
//!   link-dense lists, deduplicated on normalized URLs.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over dom_query.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Sibling-page discovery across navigation regions.
pub mod harvest;

/// Language hint extraction for fenced code blocks.
pub mod language;

/// Markdown rendering of a content region.
pub mod markdown;

/// Structural selectors for content and navigation regions.
pub mod selector;

/// Page title resolution.
pub mod title;

/// URL resolution, normalization, and origin checks.
pub mod url_utils;

use chrono::{DateTime, Utc};

// Public API - re-exports
pub use dom::{Document, Selection};
pub use error::{Error, Result};
pub use markdown::render_to_markdown;
pub use options::Options;
pub use result::{CodeBlock, ExtractedDocument, Heading, PageLink, Rendered};

/// Find the element that best represents the page's main content.
///
/// Never fails: falls back to the document body (or root) when no candidate
/// qualifies.
#[must_use]
pub fn select_content_region(doc: &Document) -> Selection<'_> {
    selector::content::select_content_region(doc, &Options::default())
}

/// [`select_content_region`] with custom thresholds.
#[must_use]
pub fn select_content_region_with_options<'a>(
    doc: &'a Document,
    options: &Options,
) -> Selection<'a> {
    selector::content::select_content_region(doc, options)
}

/// Find candidate sibling documentation pages linked from navigation
/// regions of the whole document.
#[must_use]
pub fn harvest_navigation_links(doc: &Document, current_url: &str) -> Vec<PageLink> {
    harvest::harvest_navigation_links(doc, current_url, &Options::default())
}

/// [`harvest_navigation_links`] with custom thresholds.
#[must_use]
pub fn harvest_navigation_links_with_options(
    doc: &Document,
    current_url: &str,
    options: &Options,
) -> Vec<PageLink> {
    harvest::harvest_navigation_links(doc, current_url, options)
}

/// Run the composed extraction over a parsed document.
///
/// Selects the content region, renders it to Markdown, and assembles the
/// output record. `base_url` resolves relative links and image sources;
/// `current_url` and `title` are recorded as provenance; `now` becomes the
/// extraction timestamp.
#[must_use]
pub fn extract(
    doc: &Document,
    base_url: &str,
    title: &str,
    current_url: &str,
    now: DateTime<Utc>,
) -> ExtractedDocument {
    extract_with_options(doc, base_url, title, current_url, now, &Options::default())
}

/// [`extract`] with custom thresholds.
#[must_use]
pub fn extract_with_options(
    doc: &Document,
    base_url: &str,
    title: &str,
    current_url: &str,
    now: DateTime<Utc>,
    options: &Options,
) -> ExtractedDocument {
    let region = selector::content::select_content_region(doc, options);
    let rendered = markdown::render_to_markdown(&region, base_url);

    ExtractedDocument {
        title: title.to_string(),
        url: current_url.to_string(),
        extracted_at: now,
        content: rendered.content,
        headings: rendered.headings,
        code_blocks: rendered.code_blocks,
    }
}

/// Extract from an HTML string, resolving the title from the document
/// (social metadata, first heading, `<title>`) and timestamping with the
/// current time. The page URL doubles as the link-resolution base.
#[must_use]
pub fn extract_html(html: &str, url: &str) -> ExtractedDocument {
    let doc = Document::from(html);
    let title = title::resolve_title(&doc);
    extract(&doc, url, &title, url, Utc::now())
}

/// Extract from raw HTML bytes with automatic encoding detection.
///
/// # Example
///
/// ```rust
/// use docsift::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head>\
///     <body><main><p>Menu du jour</p></main></body></html>";
/// let doc = extract_bytes(html, "https://example.com/menu");
/// assert_eq!(doc.title, "Caf\u{E9}");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], url: &str) -> ExtractedDocument {
    let html = encoding::transcode_to_utf8(html);
    extract_html(&html, url)
}
