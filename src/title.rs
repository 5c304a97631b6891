//! Page title resolution.
//!
//! Priority: social metadata (Open Graph, then Twitter card), first top-level
//! heading, document `<title>`. Returns an empty string when nothing usable
//! exists.

use dom_query::Document;

use crate::dom;

const META_TITLE_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
];

/// Resolve a page title from document metadata and structure.
#[must_use]
pub fn resolve_title(doc: &Document) -> String {
    for selector in META_TITLE_SELECTORS {
        let meta = doc.select(selector);
        if let Some(content) = meta.attr("content") {
            let title = dom::collapse_whitespace(&content).trim().to_string();
            if !title.is_empty() {
                return title;
            }
        }
    }

    let h1 = doc.select("h1");
    if h1.exists() {
        let title = dom::clean_text(&h1.first());
        if !title.is_empty() {
            return title;
        }
    }

    dom::clean_text(&doc.select("title"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_og_title_wins() {
        let doc = Document::from(
            r#"<head><meta property="og:title" content="OG Title"><title>Doc Title</title></head>
               <body><h1>Heading</h1></body>"#,
        );
        assert_eq!(resolve_title(&doc), "OG Title");
    }

    #[test]
    fn test_twitter_title_second() {
        let doc = Document::from(
            r#"<head><meta name="twitter:title" content="TW Title"><title>Doc Title</title></head>"#,
        );
        assert_eq!(resolve_title(&doc), "TW Title");
    }

    #[test]
    fn test_h1_beats_document_title() {
        let doc = Document::from(
            "<head><title>Doc Title</title></head><body><h1>Page Heading</h1></body>",
        );
        assert_eq!(resolve_title(&doc), "Page Heading");
    }

    #[test]
    fn test_document_title_fallback() {
        let doc = Document::from("<head><title>Only Title</title></head><body><p>x</p></body>");
        assert_eq!(resolve_title(&doc), "Only Title");
    }

    #[test]
    fn test_empty_when_nothing_found() {
        let doc = Document::from("<body><p>text</p></body>");
        assert_eq!(resolve_title(&doc), "");
    }
}
