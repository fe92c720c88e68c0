// src/crawl/extract.rs
// =============================================================================
// This module pulls link paths out of a response body.
//
// This is a plain pattern match, not an HTML parser: we look for the literal
// text <a href="VALUE" (tag and attribute name in any case) and take VALUE
// exactly as written, with no unescaping or URL decoding.
//
// - Results come back in the order they appear in the body
// - Duplicates inside one body are kept; the frontier store dedups later
// - No match is not an error, just an empty Vec
// =============================================================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The value stops at the first closing quote, so two anchors on the
    // same line are two separate matches.
    static ref ANCHOR_HREF: Regex = Regex::new(r#"(?i)<a href="([^"]*)""#).unwrap();
}

/// Returns every href value of every `<a href="...">` in `body`, in order.
pub fn extract_links(body: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|value| value.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body() {
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_no_anchors() {
        let html = "<html><body><p>nothing to see</p><a name=\"top\">x</a></body></html>";
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let html = r#"<a href="/a">A</a><a href="/a">A again</a><a href="/b">B</a>"#;
        assert_eq!(extract_links(html), vec!["/a", "/a", "/b"]);
    }

    #[test]
    fn test_case_insensitive_tag_and_attribute() {
        let html = r#"<A HREF="/upper"> <a Href="/mixed">"#;
        assert_eq!(extract_links(html), vec!["/upper", "/mixed"]);
    }

    #[test]
    fn test_value_captured_verbatim() {
        let html = r#"<a href="/search?q=a%20b&amp;page=2">"#;
        assert_eq!(extract_links(html), vec!["/search?q=a%20b&amp;page=2"]);
    }

    #[test]
    fn test_multiline_body() {
        let html = "<ul>\n  <li><a href=\"/one\">1</a></li>\n  <li><a href=\"/two\">2</a></li>\n</ul>";
        assert_eq!(extract_links(html), vec!["/one", "/two"]);
    }

    #[test]
    fn test_other_attribute_first_is_not_matched() {
        // Only the literal `<a href="` form counts
        let html = r#"<a class="nav" href="/skipped"><a href='/single'>"#;
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(extract_links(r#"<a href="">"#), vec![""]);
    }

    #[test]
    fn test_unterminated_value_is_ignored() {
        assert!(extract_links(r#"<a href="/never-closed"#).is_empty());
    }
}
