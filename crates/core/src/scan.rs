//! Locating slide markers in the document text.
//!
//! Slide positions are carried by `data-slide="…"` attributes whose value is
//! either a decimal number or the placeholder token marking a freshly
//! inserted slide. The document is scanned as plain text; markers are
//! identified purely by pattern, in document order.

use crate::MarkerScan;
use regex::Regex;
use std::sync::LazyLock;

/// The attribute value marking a newly inserted slide awaiting a number.
pub const PLACEHOLDER: &str = "x";

/// Regex matching a slide marker attribute; group 1 captures the value.
pub(crate) static SLIDE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-slide="(\w+)""#).unwrap());

/// Scan the document for slide markers.
///
/// Returns the 1-based ordinal of the first marker whose value is the
/// placeholder token, along with the total marker count. A document with
/// markers but no placeholder yields `placeholder_position: None`, which is
/// distinct from a document with no markers at all (`total_markers: 0`).
pub fn scan_markers(content: &str) -> MarkerScan {
    let mut placeholder_position = None;
    let mut total_markers = 0;

    for captures in SLIDE_MARKER_REGEX.captures_iter(content) {
        total_markers += 1;
        if placeholder_position.is_none() && &captures[1] == PLACEHOLDER {
            placeholder_position = Some(total_markers);
            log::info!("Found slide '{}' at position {}", PLACEHOLDER, total_markers);
        }
    }

    if placeholder_position.is_none() {
        log::warn!("No slide with data-slide=\"{}\" found", PLACEHOLDER);
    }

    MarkerScan {
        placeholder_position,
        total_markers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_placeholder_ordinal() {
        let html = r#"
            <section data-slide="1"></section>
            <section data-slide="2"></section>
            <section data-slide="x"></section>
            <section data-slide="3"></section>
        "#;
        let scan = scan_markers(html);
        assert_eq!(scan.placeholder_position, Some(3));
        assert_eq!(scan.total_markers, 4);
    }

    #[test]
    fn test_scan_no_placeholder() {
        let html = r#"<div data-slide="1"></div><div data-slide="2"></div>"#;
        let scan = scan_markers(html);
        assert_eq!(scan.placeholder_position, None);
        assert_eq!(scan.total_markers, 2);
        assert!(!scan.has_placeholder());
    }

    #[test]
    fn test_scan_empty_document() {
        let scan = scan_markers("<html></html>");
        assert_eq!(scan.placeholder_position, None);
        assert_eq!(scan.total_markers, 0);
    }

    #[test]
    fn test_scan_first_placeholder_wins() {
        let html = r#"<div data-slide="x"></div><div data-slide="x"></div>"#;
        let scan = scan_markers(html);
        assert_eq!(scan.placeholder_position, Some(1));
        assert_eq!(scan.total_markers, 2);
    }

    #[test]
    fn test_scan_placeholder_first_marker() {
        let html = r#"<div data-slide="x"></div><div data-slide="1"></div>"#;
        let scan = scan_markers(html);
        assert_eq!(scan.placeholder_position, Some(1));
    }
}
