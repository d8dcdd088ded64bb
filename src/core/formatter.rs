//! Text cleanup for display: formatting-code stripping and HTML escaping.

use std::borrow::Cow;

/// Marker that starts an inline style code (`§a`, `§l`, `§r`, ...)
pub const FORMATTING_SENTINEL: char = '§';

/// Remove every `§` and the single character following it.
///
/// Text without the sentinel is returned borrowed and untouched. A trailing
/// lone `§` is dropped.
pub fn strip_formatting_codes(text: &str) -> Cow<'_, str> {
    if !text.contains(FORMATTING_SENTINEL) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == FORMATTING_SENTINEL {
            chars.next();
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Escape `&`, `<`, `>` and `"` as named character references.
///
/// Input is treated as plain text: an existing entity such as `&amp;` is
/// escaped again to `&amp;amp;`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_removes_code_pairs() {
        assert_eq!(strip_formatting_codes("§6Gold§r text"), "Gold text");
        assert_eq!(strip_formatting_codes("§l§oBold italic"), "Bold italic");
        assert_eq!(strip_formatting_codes("end§"), "end");
    }

    #[test]
    fn test_strip_consumes_any_following_character() {
        assert_eq!(strip_formatting_codes("a§§b"), "ab");
        assert_eq!(strip_formatting_codes("a§\nb"), "ab");
        assert_eq!(strip_formatting_codes("§жслово"), "слово");
    }

    #[test]
    fn test_strip_without_sentinel_is_borrowed() {
        let text = "Plain page text.";
        assert!(matches!(strip_formatting_codes(text), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn test_stripped_output_has_no_sentinel() {
        for input in ["§a§b§c", "x§", "§§§§", "mid§kdle"] {
            let out = strip_formatting_codes(input);
            assert!(!out.contains(FORMATTING_SENTINEL), "{input:?} -> {out:?}");
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(escape_html("it's fine"), "it's fine");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        let once = escape_html("a < b");
        assert_eq!(once, "a &lt; b");
        assert_eq!(escape_html(&once), "a &amp;lt; b");
    }

    #[test]
    fn test_escaped_output_has_no_raw_specials() {
        let out = escape_html(r#"<<"&">>"#);
        assert!(!out.contains('<') && !out.contains('>') && !out.contains('"'));
        assert_eq!(out.matches('&').count(), out.matches(';').count());
    }
}
