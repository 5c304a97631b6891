//! Content region selection.
//!
//! A three-stage search: the idiom list in [`crate::patterns`] captures the
//! conventions of documentation generators and CMSes; a density-scoring pass
//! over generic containers covers unconventional layouts; the document body
//! is the terminal fallback, so selection never fails.

use dom_query::{Document, Selection};
use log::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::{CONTAINER_SELECTOR, CONTENT_SELECTORS};
use crate::selector::sidebar::is_skippable_nav;

/// Find the element that best represents the page's main content.
///
/// Tries each known content idiom in priority order, accepting the first
/// match whose text clears the `min_content_words` threshold. If no idiom
/// qualifies, every `div`/`section` that is not page chrome is scored as
/// `words + paragraph_weight * paragraphs + heading_weight * headings` and
/// the highest scorer wins; ties keep the earlier element in document order
/// since a candidate must strictly beat the running maximum. With no scored
/// candidate at all, the body (or document root) is returned.
#[must_use]
pub fn select_content_region<'a>(doc: &'a Document, options: &Options) -> Selection<'a> {
    for pattern in CONTENT_SELECTORS {
        for node in doc.select(pattern).nodes() {
            let sel = Selection::from(*node);
            if dom::word_count(&sel) > options.min_content_words {
                debug!("content region matched idiom {pattern:?}");
                return sel;
            }
        }
    }

    let mut best: Option<Selection> = None;
    let mut best_score = 0usize;
    for node in doc.select(CONTAINER_SELECTOR).nodes() {
        let sel = Selection::from(*node);
        if is_skippable_nav(&sel) {
            continue;
        }
        let score = density_score(&sel, options);
        if score > best_score {
            best_score = score;
            best = Some(sel);
        }
    }
    if let Some(sel) = best {
        debug!("content region chosen by density score {best_score}");
        return sel;
    }

    debug!("no content region candidate, falling back to body");
    let body = doc.select("body");
    if body.exists() {
        return body;
    }
    doc.select("html")
}

fn density_score(sel: &Selection, options: &Options) -> usize {
    let words = dom::word_count(sel);
    let paragraphs = sel.select("p").length();
    let headings = sel.select("h1, h2, h3, h4, h5, h6").length();
    words + options.paragraph_weight * paragraphs + options.heading_weight * headings
}
