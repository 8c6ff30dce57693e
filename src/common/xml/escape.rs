use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

use crate::common::{Error, Result};

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use launchkit::common::xml::escape_xml;
/// assert_eq!(escape_xml("R&D <beta>"), "R&amp;D &lt;beta&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Reject text that cannot be written into an XML 1.0 part.
///
/// Escaping handles markup characters, but control characters such as
/// U+0001 have no representation at all and make the package unreadable.
///
/// # Arguments
/// * `context` - Where the text came from, used in the error message
/// * `text` - The text to check
pub fn ensure_xml_text(context: &str, text: &str) -> Result<()> {
    match text.char_indices().find(|(_, c)| !is_xml_char(*c)) {
        Some((offset, c)) => Err(Error::InvalidContent(format!(
            "{}: character U+{:04X} at byte {} is not allowed in XML",
            context, c as u32, offset
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_markup_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom's & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&apos;s &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_xml("TAM $4.2B"), "TAM $4.2B");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_ensure_xml_text_accepts_common_text() {
        assert!(ensure_xml_text("title", "Grow 3x\tin 12 months\r\n🚀 ünïcode").is_ok());
    }

    #[test]
    fn test_ensure_xml_text_rejects_control_characters() {
        let err = ensure_xml_text("slide 2 title", "bad\u{1}text").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("slide 2 title"));
        assert!(message.contains("U+0001"));
        assert!(ensure_xml_text("notes", "\u{FFFE}").is_err());
    }
}
