//! Regex patterns for comment and javadoc lexing
//!
//! All patterns are compiled once at startup using `LazyLock`.
//!
//! HTML tag patterns are case-insensitive; javadoc tags are case-sensitive
//! as in the javadoc tool itself.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Build a case-insensitive regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are compile-time constants that are verified by tests.
/// The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

/// A javadoc tag word: `@param`, `@return`, `@see`, ...
pub static JAVADOC_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z][A-Za-z0-9.]*$").expect("Invalid regex pattern"));

/// A complete HTML tag token captured by the tokenizer: `<p>`, `</ul>`, `<br/>`
pub static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^<(/?)([a-z][a-z0-9]*)[^>]*>$"));

/// Layout tags that disqualify a description from single-line rendering
pub static SINGLE_LINE_BLOCKER_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"<p>|<br|<ol|<ul"));

/// Split a captured HTML tag token into (is_closing, lowercase name).
///
/// Returns None when the token is not a complete HTML tag.
#[must_use]
pub fn html_tag_parts(token: &str) -> Option<(bool, String)> {
    let caps = HTML_TAG_RE.captures(token)?;
    let closing = !caps[1].is_empty();
    Some((closing, caps[2].to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javadoc_tag_re() {
        assert!(JAVADOC_TAG_RE.is_match("@param"));
        assert!(JAVADOC_TAG_RE.is_match("@see"));
        assert!(JAVADOC_TAG_RE.is_match("@serialData"));
        assert!(!JAVADOC_TAG_RE.is_match("@"));
        assert!(!JAVADOC_TAG_RE.is_match("param"));
        assert!(!JAVADOC_TAG_RE.is_match("user@example.com"));
        assert!(!JAVADOC_TAG_RE.is_match("{@link"));
    }

    #[test]
    fn test_html_tag_parts() {
        assert_eq!(html_tag_parts("<p>"), Some((false, "p".to_string())));
        assert_eq!(html_tag_parts("</UL>"), Some((true, "ul".to_string())));
        assert_eq!(html_tag_parts("<br/>"), Some((false, "br".to_string())));
        assert_eq!(
            html_tag_parts("<table border=\"1\">"),
            Some((false, "table".to_string()))
        );
        assert_eq!(html_tag_parts("<"), None);
        assert_eq!(html_tag_parts("word"), None);
    }

    #[test]
    fn test_single_line_blockers() {
        assert!(SINGLE_LINE_BLOCKER_RE.is_match("has a <P> break"));
        assert!(SINGLE_LINE_BLOCKER_RE.is_match("line<br>break"));
        assert!(SINGLE_LINE_BLOCKER_RE.is_match("<ul><li>x</li></ul>"));
        // <pre> must not count as a paragraph tag
        assert!(!SINGLE_LINE_BLOCKER_RE.is_match("uses <pre>code</pre>"));
        assert!(!SINGLE_LINE_BLOCKER_RE.is_match("plain text"));
    }
}
