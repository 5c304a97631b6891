//! Compiled regex patterns and static selector lists.
//!
//! All regexes are compiled once at startup using `LazyLock`. The selector
//! lists encode the structural idioms of common documentation generators
//! (Docusaurus, MkDocs, Sphinx, GitBook, VuePress, VitePress, Starlight) plus
//! generic conventions, in priority order.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text patterns
// =============================================================================

/// Matches any run of whitespace, for collapsing to a single space.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches three or more consecutive newlines, for collapsing block seams.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

// =============================================================================
// Boilerplate / chrome detection
// =============================================================================

/// Matches class/id names of page chrome that never holds sibling-page
/// navigation: site headers and footers, top bars, primary menus.
pub static SKIPPABLE_NAV_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(header|footer|navbar|top[-_]?nav|main[-_]?nav)")
        .expect("SKIPPABLE_NAV_NAME regex")
});

/// Elements removed from the render-scoped clone before Markdown conversion.
///
/// Navigation landmarks, executable/style content, inline frames, vector
/// graphics, and the class idioms of ad units and cookie/consent banners.
pub const REMOVAL_SELECTOR: &str = "nav, script, style, noscript, iframe, svg, \
    .advertisement, .advert, .ads, .ad-banner, .sponsored, \
    [class*=cookie-banner], [class*=cookie-consent], [class*=cookie-notice], \
    [class*=consent-banner], [class*=gdpr-banner]";

// =============================================================================
// Content region idioms
// =============================================================================

/// Main-content selector patterns in priority order. First matched element
/// with substantial text wins.
pub const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role=main]",
    "#main-content",
    ".main-content",
    "#content",
    ".content",
    ".markdown-body",
    ".theme-doc-markdown",
    ".md-content",
    ".rst-content",
    ".book-body",
    ".docs-content",
    ".doc-content",
    "#docs-content",
    ".documentation",
    ".post-content",
    ".article-content",
    "[itemprop=articleBody]",
];

/// Tags considered generic containers for the density-scoring fallback.
pub const CONTAINER_SELECTOR: &str = "div, section";

// =============================================================================
// Sidebar / table-of-contents idioms
// =============================================================================

/// Anchor-collection patterns for known sidebar and table-of-contents
/// conventions, generic idioms first, then framework-specific ones.
pub const SIDEBAR_LINK_SELECTORS: &[&str] = &[
    ".sidebar a",
    "#sidebar a",
    "aside.sidebar a",
    "nav.sidebar a",
    ".sidebar-nav a",
    ".sidebar-menu a",
    ".sidebar-links a",
    ".docs-sidebar a",
    ".doc-sidebar a",
    ".nav-sidebar a",
    ".toc a",
    "#toc a",
    ".table-of-contents a",
    ".docs-nav a",
    ".docs-menu a",
    // Docusaurus
    ".theme-doc-sidebar-menu a",
    ".menu__list a",
    // MkDocs / Material
    ".md-nav a",
    // Sphinx and Read the Docs themes
    ".sphinxsidebar a",
    ".wy-menu a",
    ".bd-sidebar a",
    // GitBook
    ".book-summary a",
    // VuePress / VitePress
    ".sidebar-group a",
    ".VPSidebar a",
    // Starlight
    ".sl-sidebar-state a",
];

// =============================================================================
// Link filtering
// =============================================================================

/// File extensions that mark a link as a download rather than a sibling
/// documentation page.
pub const NON_DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "zip", "tar", "gz", "exe", "dmg", "pkg"];
