//! Result types for extraction output.
//!
//! These types define the only bit-exact external formats of the crate: the
//! camelCase JSON document shape and the Markdown document with a provenance
//! header.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A heading encountered in the content region, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,

    /// Collapsed, trimmed heading text.
    pub text: String,

    /// The element's `id` attribute, when present (anchor target).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A fenced code block collected from the content region, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Detected language hint; empty when none was found.
    pub language: String,

    /// Raw trimmed code text.
    pub code: String,
}

/// A candidate sibling page discovered by the navigation harvester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    /// Trimmed anchor text (at least two characters).
    pub title: String,

    /// Absolute URL as resolved from the anchor's href.
    pub url: String,

    /// Whether the link points at the page it was harvested from.
    pub is_current_page: bool,
}

/// Output of rendering a content region to Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// The Markdown text.
    pub content: String,

    /// Every h1-h6 in the region, document order.
    pub headings: Vec<Heading>,

    /// Every nonempty `pre` code block in the region, document order.
    pub code_blocks: Vec<CodeBlock>,
}

/// The engine's single output record for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocument {
    /// Resolved page title.
    pub title: String,

    /// The page's URL.
    pub url: String,

    /// When extraction ran.
    pub extracted_at: DateTime<Utc>,

    /// Main content as Markdown.
    pub content: String,

    /// Headings in document order.
    pub headings: Vec<Heading>,

    /// Code blocks in document order.
    pub code_blocks: Vec<CodeBlock>,
}

impl ExtractedDocument {
    /// Serialize to the camelCase JSON wire shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a standalone Markdown document with a provenance header:
    /// the title as an h1, a source-URL/timestamp block, then the content.
    #[must_use]
    pub fn to_markdown_document(&self) -> String {
        format!(
            "# {}\n\n> Source: {}\n> Extracted: {}\n\n{}\n",
            self.title,
            self.url,
            self.extracted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.content
        )
    }
}
