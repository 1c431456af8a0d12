//! URL Percent Escaping
//!
//! Escapes every byte outside the unreserved set (ALPHA / DIGIT / `-` `.`
//! `_` `~`), matching the default behavior of the classic transfer-library
//! escape helpers.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the unreserved characters.
const URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` for safe inclusion in a URL.
pub fn escape(input: &str) -> String {
    utf8_percent_encode(input, URL_ESCAPE).to_string()
}

/// Decode percent-escapes in `input`.
///
/// Malformed escapes (a lone `%`, or `%` followed by non-hex digits) pass
/// through unchanged. Decoded bytes that do not form valid UTF-8 are
/// replaced with U+FFFD.
pub fn unescape(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_unreserved_passthrough() {
        let input = "AZaz09-._~";
        assert_eq!(escape(input), input);
    }

    #[test]
    fn test_escape_reserved_and_spaces() {
        assert_eq!(escape("a b&c"), "a%20b%26c");
        assert_eq!(escape("100%"), "100%25");
        assert_eq!(
            escape("https://example.com/?q=1"),
            "https%3A%2F%2Fexample.com%2F%3Fq%3D1"
        );
    }

    #[test]
    fn test_escape_multibyte() {
        assert_eq!(escape("é"), "%C3%A9");
    }

    #[test]
    fn test_unescape_roundtrip() {
        let original = "a value with spaces & symbols / é";
        assert_eq!(unescape(&escape(original)), original);
    }

    #[test]
    fn test_unescape_malformed_passthrough() {
        assert_eq!(unescape("50% off"), "50% off");
        assert_eq!(unescape("%zz"), "%zz");
        assert_eq!(unescape("trailing%"), "trailing%");
    }

    #[test]
    fn test_unescape_plus_is_not_space() {
        // Plus-to-space is a form-encoding rule, not a percent-decoding one.
        assert_eq!(unescape("a+b"), "a+b");
    }
}
