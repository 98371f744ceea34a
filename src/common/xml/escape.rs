use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters that XML 1.0 cannot represent, borrowing when there are none.
fn strip_invalid(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Escape XML special characters.
///
/// Control characters that are not legal in XML 1.0 are removed, so any
/// record value can be written into a part without producing a corrupt file.
///
/// # Examples
///
/// ```
/// use tabula::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(&strip_invalid(s), &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_keeps_whitespace_controls() {
        assert_eq!(escape_xml("a\tb\nc\r"), "a\tb\nc\r");
    }

    #[test]
    fn test_escape_strips_invalid_chars() {
        assert_eq!(escape_xml("x\u{0}y\u{1F}z\u{FFFE}"), "xyz");
    }

    #[test]
    fn test_escapes_all_specials() {
        assert_eq!(escape_xml(r#"Q&A <"x"> 'y'"#), "Q&amp;A &lt;&quot;x&quot;&gt; &apos;y&apos;");
    }
}
