//! Language hint extraction for fenced code blocks.
//!
//! Documentation generators tag code samples with class tokens such as
//! `language-rust`, `lang-py`, or bare names like `python`. The renderer uses
//! the detected hint to annotate Markdown fences.

/// Language names recognized as bare class tokens (no `language-` prefix).
const KNOWN_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "python", "rust", "go", "java", "kotlin", "swift",
    "ruby", "php", "perl", "c", "cpp", "csharp", "scala", "haskell", "elixir",
    "erlang", "clojure", "lua", "r", "julia", "dart", "bash", "shell", "sh",
    "zsh", "powershell", "sql", "html", "css", "scss", "less", "xml", "json",
    "yaml", "toml", "ini", "markdown", "diff", "dockerfile", "makefile",
    "graphql", "protobuf",
];

/// Extract a code-language tag from a space-separated class attribute.
///
/// Tokens are scanned in declaration order. The first token carrying a
/// `language-` or `lang-` prefix wins with the prefix stripped; failing that,
/// the first token that exactly matches a known language name wins. The
/// result is lowercased. No match yields an empty string, which the renderer
/// turns into an unlabeled fence.
///
/// # Example
///
/// ```rust
/// use docsift::language::language_from_class;
///
/// assert_eq!(language_from_class("highlight language-python"), "python");
/// assert_eq!(language_from_class("rust snippet"), "rust");
/// assert_eq!(language_from_class("highlight"), "");
/// ```
#[must_use]
pub fn language_from_class(class: &str) -> String {
    for token in class.split_whitespace() {
        let lowered = token.to_lowercase();
        if let Some(stripped) = lowered.strip_prefix("language-") {
            return stripped.to_string();
        }
        if let Some(stripped) = lowered.strip_prefix("lang-") {
            return stripped.to_string();
        }
    }

    for token in class.split_whitespace() {
        let lowered = token.to_lowercase();
        if KNOWN_LANGUAGES.contains(&lowered.as_str()) {
            return lowered;
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_prefix_wins() {
        assert_eq!(language_from_class("language-rust"), "rust");
        assert_eq!(language_from_class("hljs language-python"), "python");
        assert_eq!(language_from_class("lang-js"), "js");
    }

    #[test]
    fn test_prefix_case_insensitive_and_lowercased() {
        assert_eq!(language_from_class("Language-Python"), "python");
        assert_eq!(language_from_class("LANG-SQL"), "sql");
    }

    #[test]
    fn test_bare_known_language() {
        assert_eq!(language_from_class("highlight python"), "python");
        assert_eq!(language_from_class("Rust"), "rust");
    }

    #[test]
    fn test_earliest_declared_wins() {
        // Token order decides, not match quality
        assert_eq!(language_from_class("lang-go language-rust"), "go");
        assert_eq!(language_from_class("python javascript"), "python");
    }

    #[test]
    fn test_prefix_beats_bare_token_regardless_of_order() {
        // The prefix scan runs over the whole list before the allow-list scan
        assert_eq!(language_from_class("python language-rust"), "rust");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(language_from_class(""), "");
        assert_eq!(language_from_class("highlight pretty"), "");
    }
}
