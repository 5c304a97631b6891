//! Configuration options for extraction and harvesting.
//!
//! Every heuristic threshold used by the engine is a named field here rather
//! than a literal buried in traversal code, so callers can retune the
//! precision/recall tradeoff without touching the algorithms.

/// Tuning knobs for content selection and navigation harvesting.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the recognized defaults.
///
/// # Example
///
/// ```rust
/// use docsift::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_content_words: 25,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Minimum word count for an idiom-matched element to be accepted as the
    /// content region. Smaller matches are assumed to be false positives
    /// (e.g. a teaser snippet).
    ///
    /// Default: `50`
    pub min_content_words: usize,

    /// Weight of each paragraph in the density score
    /// (`words + paragraph_weight * paragraphs + heading_weight * headings`).
    ///
    /// Default: `10`
    pub paragraph_weight: usize,

    /// Weight of each heading in the density score.
    ///
    /// Default: `20`
    pub heading_weight: usize,

    /// A sidebar idiom pattern contributes its links only when it matches
    /// strictly more than this many anchors.
    ///
    /// Default: `2`
    pub sidebar_min_links: usize,

    /// A generic `nav`/`aside` landmark contributes its links only when it
    /// contains strictly more than this many anchors.
    ///
    /// Default: `5`
    pub landmark_min_links: usize,

    /// A plain list qualifies for the link-dense heuristic only when it
    /// contains strictly more than this many same-origin anchors.
    ///
    /// Default: `5`
    pub dense_list_min_internal: usize,

    /// A plain list qualifies for the link-dense heuristic only when its
    /// same-origin anchors are strictly more than this fraction of all its
    /// anchors.
    ///
    /// Default: `0.8`
    pub internal_link_ratio: f64,

    /// Later harvesting strategies run only while fewer than this many links
    /// have been collected.
    ///
    /// Default: `3`
    pub harvest_enough_links: usize,

    /// Minimum character count for a link title; shorter anchors are
    /// rejected as icons or decorations.
    ///
    /// Default: `2`
    pub min_link_title_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_content_words: 50,
            paragraph_weight: 10,
            heading_weight: 20,
            sidebar_min_links: 2,
            landmark_min_links: 5,
            dense_list_min_internal: 5,
            internal_link_ratio: 0.8,
            harvest_enough_links: 3,
            min_link_title_chars: 2,
        }
    }
}
