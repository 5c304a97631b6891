//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate so the engine reads in terms of
//! document-tree operations rather than crate-specific calls. The adapter is
//! strictly read-only except for [`clone_fragment`], which materializes a
//! render-scoped copy that the Markdown pass is free to prune.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_RUN;

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> String {
    sel.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// Get combined id and class for name-based skip checks
#[inline]
#[must_use]
pub fn id_class(sel: &Selection) -> String {
    let id = sel.attr("id").map(|s| s.to_string()).unwrap_or_default();
    format!("{id}{}", class_name(sel))
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_lowercase())
}

/// Get a node's tag name (lowercase), `None` for non-elements
#[must_use]
pub fn node_tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_lowercase())
}

/// Get an attribute straight off a node
#[inline]
#[must_use]
pub fn node_attr(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Collapse every whitespace run to a single space
#[inline]
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").to_string()
}

/// Collapsed, trimmed text content of a selection
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    collapse_whitespace(&text_content(sel)).trim().to_string()
}

/// Count whitespace-separated words in a selection's text
#[must_use]
pub fn word_count(sel: &Selection) -> usize {
    text_content(sel).split_whitespace().count()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Check whether a node sits inside an element with the given tag
#[must_use]
pub fn has_ancestor(node: &NodeRef, tag: &str) -> bool {
    let mut current = node.parent();
    while let Some(anc) = current {
        if let Some(name) = anc.node_name() {
            if name.eq_ignore_ascii_case(tag) {
                return true;
            }
        }
        current = anc.parent();
    }
    false
}

// === Cloning ===

/// Materialize an element as its own document.
///
/// The clone is a fresh tree parsed from the element's outer HTML, so the
/// caller may remove nodes from it without touching the source document.
#[must_use]
pub fn clone_fragment(sel: &Selection) -> Document {
    Document::from(sel.html().to_string())
}
