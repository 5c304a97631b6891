//! Markdown rendering of a content region.
//!
//! Rendering operates on a render-scoped clone of the region: disallowed
//! subtrees (navigation landmarks, scripts, frames, ad and consent banners)
//! are removed from the clone first, so they contribute nothing to the output
//! or to the heading/code-block collections, and the caller's tree is never
//! mutated.
//!
//! Traversal is depth-first, bottom-up text synthesis: each element's
//! rendering is a function of its own tag and the already-rendered
//! concatenation of its children. Tags without a rule are transparent and
//! pass their children's rendering through unchanged.

use dom_query::{NodeRef, Selection};

use crate::dom;
use crate::language::language_from_class;
use crate::patterns::{MULTIPLE_NEWLINES, REMOVAL_SELECTOR};
use crate::result::{CodeBlock, Heading, Rendered};
use crate::url_utils::make_absolute;

/// Convert a content region to Markdown.
///
/// Returns the Markdown text plus the ordered heading and code-block lists
/// collected from the same (post-removal) subtree. Relative link and image
/// URLs are resolved against `base_url`.
#[must_use]
pub fn render_to_markdown(region: &Selection, base_url: &str) -> Rendered {
    let clone = dom::clone_fragment(region);
    clone.select(REMOVAL_SELECTOR).remove();

    let root = clone.select("body");
    let root = if root.exists() { root } else { clone.select("html") };
    let Some(root_node) = root.nodes().first().copied() else {
        return Rendered::default();
    };

    let raw = render_node(&root_node, base_url);
    let content = collapse_block_seams(&raw);

    Rendered {
        content,
        headings: collect_headings(&root_node),
        code_blocks: collect_code_blocks(&root_node),
    }
}

fn render_node(node: &NodeRef, base_url: &str) -> String {
    if node.is_text() {
        return dom::collapse_whitespace(&node.text());
    }
    if !node.is_element() {
        return String::new();
    }

    let sel = Selection::from(*node);

    // Hidden elements contribute nothing; children are not visited
    if dom::has_attribute(&sel, "hidden")
        || dom::get_attribute(&sel, "aria-hidden").as_deref() == Some("true")
    {
        return String::new();
    }

    let tag = dom::node_tag_name(node).unwrap_or_default();

    match tag.as_str() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = usize::from(tag.as_bytes()[1] - b'0');
            let text = render_children(node, base_url);
            format!("\n\n{} {}\n\n", "#".repeat(level), text.trim())
        }
        "p" => format!("\n\n{}\n\n", render_children(node, base_url).trim()),
        "br" => "\n".to_string(),
        "hr" => "\n\n---\n\n".to_string(),
        "strong" | "b" => format!("**{}**", render_children(node, base_url).trim()),
        "em" | "i" => format!("*{}*", render_children(node, base_url).trim()),
        "code" => {
            if dom::has_ancestor(node, "pre") {
                // The enclosing pre emits the fence
                render_children(node, base_url)
            } else {
                format!("`{}`", render_children(node, base_url).trim())
            }
        }
        "pre" => {
            // A pre with no text yields no fence, matching the code-block
            // collection which also skips it
            let (language, code) = code_fence_parts(&sel);
            if code.is_empty() {
                String::new()
            } else {
                format!("\n\n```{language}\n{code}\n```\n\n")
            }
        }
        "a" => {
            let text = render_children(node, base_url).trim().to_string();
            match dom::get_attribute(&sel, "href") {
                Some(href) if !href.trim().is_empty() && !text.is_empty() => {
                    format!("[{}]({})", text, make_absolute(&href, base_url))
                }
                _ => text,
            }
        }
        "ul" => render_list(node, base_url, false),
        "ol" => render_list(node, base_url, true),
        "blockquote" => {
            let inner = render_children(node, base_url);
            let inner = MULTIPLE_NEWLINES.replace_all(&inner, "\n\n");
            let quoted = inner
                .trim()
                .lines()
                .map(|line| {
                    // Blank interior lines get a bare marker, no trailing space
                    if line.is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {line}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n\n{quoted}\n\n")
        }
        "table" => render_table(&sel),
        "img" => match dom::get_attribute(&sel, "src") {
            Some(src) if !src.trim().is_empty() => {
                let alt = dom::get_attribute(&sel, "alt")
                    .map(|a| a.trim().to_string())
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| "image".to_string());
                format!("![{}]({})", alt, make_absolute(&src, base_url))
            }
            _ => String::new(),
        },
        // Also stripped during preprocessing
        "script" | "style" | "noscript" | "svg" => String::new(),
        _ => render_children(node, base_url),
    }
}

/// Collapse the blank-line seams left between adjacent blocks to a single
/// blank line and drop leading/trailing blanks, leaving the interior of
/// fenced code blocks byte-for-byte untouched.
fn collapse_block_seams(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_fence = false;
    let mut pending_blank = false;

    for line in raw.split('\n') {
        let is_fence_delimiter = line.trim_start().starts_with("```");

        if in_fence {
            kept.push(line);
            if is_fence_delimiter {
                in_fence = false;
            }
            continue;
        }

        if line.trim().is_empty() {
            pending_blank = true;
            continue;
        }

        if pending_blank && !kept.is_empty() {
            kept.push("");
        }
        pending_blank = false;
        kept.push(line);

        if is_fence_delimiter {
            in_fence = true;
        }
    }

    kept.join("\n")
}

fn render_children(node: &NodeRef, base_url: &str) -> String {
    let mut out = String::new();
    for child in node.children() {
        out.push_str(&render_node(&child, base_url));
    }
    out
}

fn render_list(node: &NodeRef, base_url: &str, ordered: bool) -> String {
    let mut items: Vec<String> = Vec::new();
    for child in node.children() {
        if dom::node_tag_name(&child).as_deref() != Some("li") {
            continue;
        }
        let item = render_node(&child, base_url).trim().to_string();
        let prefix = if ordered {
            format!("{}. ", items.len() + 1)
        } else {
            "- ".to_string()
        };
        items.push(format!("{prefix}{item}"));
    }
    format!("\n\n{}\n\n", items.join("\n"))
}

fn render_table(table: &Selection) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut separator_emitted = false;

    for tr in table.select("tr").iter() {
        let cells: Vec<String> = tr
            .select("th, td")
            .iter()
            .map(|cell| dom::clean_text(&cell))
            .collect();
        if cells.is_empty() {
            continue;
        }
        lines.push(format!("| {} |", cells.join(" | ")));

        // One separator after the first collected row, never again
        if !separator_emitted {
            lines.push(format!("| {} |", vec!["---"; cells.len()].join(" | ")));
            separator_emitted = true;
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    format!("\n\n{}\n\n", lines.join("\n"))
}

/// Language hint and raw code text for a `pre` element.
///
/// The code text is the raw trimmed text content of the descendant `code`
/// element (or the `pre` itself), not the recursively rendered children, so
/// markup nested inside code samples is not double-processed. The language
/// hint comes from the `code` element's class list, falling back to the
/// `pre` element's own classes.
fn code_fence_parts(pre: &Selection) -> (String, String) {
    let code_sel = pre.select("code");
    let (text, class) = if code_sel.exists() {
        let code = code_sel.first();
        (dom::text_content(&code).to_string(), dom::class_name(&code))
    } else {
        (dom::text_content(pre).to_string(), String::new())
    };

    let mut language = language_from_class(&class);
    if language.is_empty() {
        language = language_from_class(&dom::class_name(pre));
    }
    (language, text.trim().to_string())
}

fn collect_headings(root: &NodeRef) -> Vec<Heading> {
    let mut headings = Vec::new();
    for node in root.descendants() {
        let Some(tag) = dom::node_tag_name(&node) else {
            continue;
        };
        if tag.len() == 2 && tag.starts_with('h') && tag.as_bytes()[1].is_ascii_digit() {
            let level = tag.as_bytes()[1] - b'0';
            if !(1..=6).contains(&level) {
                continue;
            }
            let sel = Selection::from(node);
            headings.push(Heading {
                level,
                text: dom::clean_text(&sel),
                id: dom::get_attribute(&sel, "id"),
            });
        }
    }
    headings
}

fn collect_code_blocks(root: &NodeRef) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    for node in root.descendants() {
        if dom::node_tag_name(&node).as_deref() != Some("pre") {
            continue;
        }
        let (language, code) = code_fence_parts(&Selection::from(node));
        if code.is_empty() {
            continue;
        }
        blocks.push(CodeBlock { language, code });
    }
    blocks
}
