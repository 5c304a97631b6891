//! Sibling-page discovery across the whole document.
//!
//! Harvesting runs a cascade of three strategies, each allowed to add to the
//! running result set: known sidebar idioms, then generic navigation
//! landmarks, then lists dense with same-origin links. Later strategies only
//! run while the yield so far is small. All strategies share one collection
//! rule and one seen-set keyed on normalized URLs, scoped to a single call.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use log::debug;

use crate::dom;
use crate::options::Options;
use crate::patterns::{NON_DOCUMENT_EXTENSIONS, SIDEBAR_LINK_SELECTORS};
use crate::result::PageLink;
use crate::selector::sidebar::is_skippable_nav;
use crate::url_utils::{has_extension, has_fragment, make_absolute, normalize_url, same_origin, urls_match};

/// Find candidate sibling documentation pages linked from navigation regions.
///
/// Returns links in discovery order, each unique by normalized URL. An empty
/// result is valid: the page simply exposes no harvestable navigation.
#[must_use]
pub fn harvest_navigation_links(
    doc: &Document,
    current_url: &str,
    options: &Options,
) -> Vec<PageLink> {
    let mut links: Vec<PageLink> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    // Strategy 1: sidebar and table-of-contents idioms. Unsupported patterns
    // are skipped without aborting the cascade.
    for pattern in SIDEBAR_LINK_SELECTORS {
        let Some(anchors) = doc.try_select(pattern) else {
            continue;
        };
        if anchors.length() > options.sidebar_min_links {
            collect_links(&anchors, current_url, options, &mut links, &mut seen);
        }
    }
    debug!("sidebar idioms yielded {} links", links.len());

    // Strategy 2: generic navigation landmarks, minus page chrome
    if links.len() < options.harvest_enough_links {
        for node in doc.select("nav, aside, [role=navigation]").nodes() {
            let sel = Selection::from(*node);
            if is_skippable_nav(&sel) {
                continue;
            }
            let anchors = sel.select("a");
            if anchors.length() > options.landmark_min_links {
                collect_links(&anchors, current_url, options, &mut links, &mut seen);
            }
        }
        debug!("after landmark scan: {} links", links.len());
    }

    // Strategy 3: lists dense with same-origin links. The internal ratio
    // gates only the selection of the list; collection keeps the shared rule.
    if links.len() < options.harvest_enough_links {
        for node in doc.select("ul, ol").nodes() {
            let sel = Selection::from(*node);
            let anchors = sel.select("a");
            let total = anchors.length();
            if total == 0 {
                continue;
            }
            let internal = anchors
                .iter()
                .filter(|anchor| {
                    anchor.attr("href").is_some_and(|href| {
                        same_origin(&make_absolute(&href, current_url), current_url)
                    })
                })
                .count();
            if internal > options.dense_list_min_internal
                && internal as f64 > options.internal_link_ratio * total as f64
            {
                collect_links(&anchors, current_url, options, &mut links, &mut seen);
            }
        }
        debug!("after dense-list scan: {} links", links.len());
    }

    links
}

/// Shared link-collection rule.
///
/// Resolves each anchor to an absolute URL and rejects: missing/short
/// titles, cross-origin targets, in-page jumps on the current page,
/// non-document downloads, and URLs already seen under normalization.
fn collect_links(
    anchors: &Selection,
    current_url: &str,
    options: &Options,
    links: &mut Vec<PageLink>,
    seen: &mut HashSet<String>,
) {
    for anchor in anchors.iter() {
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        let href = href.trim().to_string();
        if href.is_empty() {
            continue;
        }

        let title = dom::clean_text(&anchor);
        if title.chars().count() < options.min_link_title_chars {
            continue;
        }

        let absolute = make_absolute(&href, current_url);
        if !same_origin(&absolute, current_url) {
            continue;
        }
        // In-page jump: a fragment href that lands on the page itself
        if has_fragment(&href) && urls_match(&absolute, current_url) {
            continue;
        }
        if has_extension(&absolute, NON_DOCUMENT_EXTENSIONS) {
            continue;
        }

        let normalized = normalize_url(&absolute);
        if !seen.insert(normalized) {
            continue;
        }

        let is_current_page = urls_match(&absolute, current_url);
        links.push(PageLink {
            title,
            url: absolute,
            is_current_page,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = "https://docs.example.com/guide/intro";

    fn harvest(html: &str) -> Vec<PageLink> {
        let doc = Document::from(html);
        harvest_navigation_links(&doc, CURRENT, &Options::default())
    }

    fn sidebar(links: &str) -> String {
        format!(r#"<body><div class="sidebar">{links}</div></body>"#)
    }

    #[test]
    fn test_sidebar_idiom_collects_links() {
        let html = sidebar(
            r#"<a href="/guide/install">Install</a>
               <a href="/guide/usage">Usage</a>
               <a href="/guide/faq">FAQ</a>"#,
        );
        let links = harvest(&html);
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].title, "Install");
        assert_eq!(links[0].url, "https://docs.example.com/guide/install");
        assert!(!links[0].is_current_page);
    }

    #[test]
    fn test_sidebar_with_too_few_links_is_ignored() {
        // Two anchors do not clear the >2 threshold
        let html = sidebar(r#"<a href="/a1">Page A</a><a href="/b1">Page B</a>"#);
        assert!(harvest(&html).is_empty());
    }

    #[test]
    fn test_dedup_on_trailing_slash() {
        let html = sidebar(
            r#"<a href="/guide/setup/">Setup</a>
               <a href="/guide/setup">Setup again</a>
               <a href="/guide/other">Other</a>"#,
        );
        let links = harvest(&html);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].title, "Setup");
    }

    #[test]
    fn test_same_page_anchor_rejected_but_self_link_kept() {
        let html = sidebar(
            r##"<a href="#section">Jump</a>
               <a href="/guide/intro">Introduction</a>
               <a href="/guide/next">Next</a>
               <a href="/guide/prev">Previous</a>"##,
        );
        let links = harvest(&html);
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert!(!titles.contains(&"Jump"));
        let intro = links.iter().find(|l| l.title == "Introduction");
        assert!(intro.is_some_and(|l| l.is_current_page));
    }

    #[test]
    fn test_cross_origin_and_downloads_rejected() {
        let html = sidebar(
            r#"<a href="https://other.com/page">Elsewhere</a>
               <a href="/files/manual.pdf">Manual</a>
               <a href="/archive.tar.gz">Archive</a>
               <a href="/guide/one">One</a>
               <a href="/guide/two">Two</a>"#,
        );
        let links = harvest(&html);
        let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn test_short_titles_rejected() {
        let html = sidebar(
            r#"<a href="/guide/a2">x</a>
               <a href="/guide/b2">Long enough</a>
               <a href="/guide/c2">Also fine</a>
               <a href="/guide/d2"></a>"#,
        );
        let links = harvest(&html);
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn test_landmark_scan_runs_when_sidebar_sparse() {
        let html = r#"<body><main><nav class="pages">
            <a href="/guide/a">Page A</a>
            <a href="/guide/b">Page B</a>
            <a href="/guide/c">Page C</a>
            <a href="/guide/d">Page D</a>
            <a href="/guide/e">Page E</a>
            <a href="/guide/f">Page F</a>
        </nav></main></body>"#;
        let links = harvest(html);
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn test_landmark_scan_skips_chrome() {
        let html = r#"<body><header><nav>
            <a href="/guide/a">Page A</a>
            <a href="/guide/b">Page B</a>
            <a href="/guide/c">Page C</a>
            <a href="/guide/d">Page D</a>
            <a href="/guide/e">Page E</a>
            <a href="/guide/f">Page F</a>
        </nav></header></body>"#;
        assert!(harvest(html).is_empty());
    }

    #[test]
    fn test_landmark_with_few_links_ignored() {
        let html = r#"<body><main><nav class="pages">
            <a href="/guide/a">Page A</a>
            <a href="/guide/b">Page B</a>
            <a href="/guide/c">Page C</a>
        </nav></main></body>"#;
        assert!(harvest(html).is_empty());
    }

    #[test]
    fn test_dense_internal_list_selected() {
        let html = r#"<body><div class="links"><ul>
            <li><a href="/guide/a">Page A</a></li>
            <li><a href="/guide/b">Page B</a></li>
            <li><a href="/guide/c">Page C</a></li>
            <li><a href="/guide/d">Page D</a></li>
            <li><a href="/guide/e">Page E</a></li>
            <li><a href="/guide/f">Page F</a></li>
        </ul></div></body>"#;
        let links = harvest(html);
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn test_list_below_internal_ratio_never_selected() {
        // 6 of 10 internal = 60%, below the strict 80% bar
        let html = r#"<body><div><ul>
            <li><a href="/p/a">Page A</a></li>
            <li><a href="/p/b">Page B</a></li>
            <li><a href="/p/c">Page C</a></li>
            <li><a href="/p/d">Page D</a></li>
            <li><a href="/p/e">Page E</a></li>
            <li><a href="/p/f">Page F</a></li>
            <li><a href="https://x1.com/">External 1</a></li>
            <li><a href="https://x2.com/">External 2</a></li>
            <li><a href="https://x3.com/">External 3</a></li>
            <li><a href="https://x4.com/">External 4</a></li>
        </ul></div></body>"#;
        assert!(harvest(html).is_empty());
    }

    #[test]
    fn test_later_strategies_skipped_when_sidebar_suffices() {
        let html = r#"<body>
            <div class="sidebar">
                <a href="/s/a">Side A</a>
                <a href="/s/b">Side B</a>
                <a href="/s/c">Side C</a>
            </div>
            <main><nav class="pages">
                <a href="/n/a">Nav A</a>
                <a href="/n/b">Nav B</a>
                <a href="/n/c">Nav C</a>
                <a href="/n/d">Nav D</a>
                <a href="/n/e">Nav E</a>
                <a href="/n/f">Nav F</a>
            </nav></main>
        </body>"#;
        let links = harvest(html);
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.url.contains("/s/")));
    }

    #[test]
    fn test_unparseable_current_url_yields_empty() {
        let html = sidebar(
            r#"<a href="/a3">Page A</a><a href="/b3">Page B</a><a href="/c3">Page C</a>"#,
        );
        let doc = Document::from(html.as_str());
        let links = harvest_navigation_links(&doc, "not a url", &Options::default());
        assert!(links.is_empty());
    }

    #[test]
    fn test_results_scoped_per_call() {
        let html = sidebar(
            r#"<a href="/guide/a">Page A</a>
               <a href="/guide/b">Page B</a>
               <a href="/guide/c">Page C</a>"#,
        );
        let doc = Document::from(html.as_str());
        let first = harvest_navigation_links(&doc, CURRENT, &Options::default());
        let second = harvest_navigation_links(&doc, CURRENT, &Options::default());
        assert_eq!(first, second);
    }
}
