//! Updating the JavaScript `totalSlides` constant.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching the total-count constant declaration.
static TOTAL_SLIDES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const totalSlides = \d+;").unwrap());

/// Replace every `const totalSlides = …;` declaration with the new total.
///
/// A plain global substitution: no positional logic, all occurrences are
/// rewritten identically.
pub fn update_total_constant(content: &str, new_total: usize) -> String {
    let replacement = format!("const totalSlides = {new_total};");
    let result = TOTAL_SLIDES_REGEX
        .replace_all(content, replacement.as_str())
        .into_owned();
    log::info!("Updated JavaScript totalSlides to {}", new_total);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_updated() {
        let html = "<script>const totalSlides = 5;</script>";
        assert_eq!(
            update_total_constant(html, 6),
            "<script>const totalSlides = 6;</script>"
        );
    }

    #[test]
    fn test_constant_all_occurrences_updated() {
        let html = "const totalSlides = 5;\nconst totalSlides = 5;";
        assert_eq!(
            update_total_constant(html, 6),
            "const totalSlides = 6;\nconst totalSlides = 6;"
        );
    }

    #[test]
    fn test_constant_absent_is_noop() {
        let html = "<script>let n = 5;</script>";
        assert_eq!(update_total_constant(html, 6), html);
    }
}
