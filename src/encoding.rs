//! Character encoding detection and transcoding.
//!
//! Input bytes are decoded to UTF-8 before parsing: a byte-order mark wins,
//! then any `charset=` declaration in an early `<meta>` tag (both the bare
//! `<meta charset>` and the `http-equiv` form carry one), then the UTF-8 web
//! default. Invalid sequences become replacement characters rather than
//! errors.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches `charset=...` inside a meta tag, either declaration form.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([a-zA-Z0-9_.:\-]+)"#).expect("META_CHARSET regex")
});

/// Bytes examined for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Detect the character encoding of an HTML byte stream.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the detected encoding.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_charset_detected() {
        let html = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn test_http_equiv_charset_detected() {
        let html =
            br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // WHATWG maps ISO-8859-1 to windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(detect_encoding(b"<html><body>x</body></html>"), UTF_8);
    }

    #[test]
    fn test_transcode_latin1_body() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{E9}"));
    }

    #[test]
    fn test_invalid_bytes_replaced_not_fatal() {
        let html = b"<html><body>ok \xFF\xFE still ok</body></html>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("ok"));
        assert!(text.contains("still ok"));
    }

    #[test]
    fn test_unquoted_charset() {
        let html = b"<meta charset=utf-8>";
        assert_eq!(detect_encoding(html), UTF_8);
    }
}
