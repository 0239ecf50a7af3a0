//! Rewriting the visible "current / total" slide-number displays.
//!
//! Displays are matched by their own patterns, independently of the
//! `data-slide` attribute scan. If the two drift apart in the source
//! document, each rewrite reflects only what its own pattern matched.

use crate::edit::{apply_edits, Edit};
use regex::Regex;
use std::sync::LazyLock;

/// Regex matching a "current / total" display; groups 1 and 2 capture the
/// two numbers.
static DISPLAY_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="slide-number">(\d+) / (\d+)</div>"#).unwrap());

/// Regex matching a bare placeholder display on a freshly inserted slide.
static DISPLAY_PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="slide-number">x</div>"#).unwrap());

/// Result of rewriting the slide-number displays.
#[derive(Debug, Clone)]
pub struct UpdatedDisplays {
    /// Document text with updated displays.
    pub content: String,

    /// Number of displays rewritten.
    pub replacements: usize,
}

/// Rewrite every slide-number display to reflect the insertion.
///
/// A numeric pair keeps its current value unless it is at or after the
/// insertion position, in which case it is incremented; the total is always
/// replaced with `new_total`. A bare placeholder display becomes the pair
/// for the inserted slide itself.
pub fn update_displays(
    content: &str,
    placeholder_position: usize,
    new_total: usize,
) -> UpdatedDisplays {
    let mut edits = Vec::new();

    for captures in DISPLAY_PAIR_REGEX.captures_iter(content) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Ok(current) = captures[1].parse::<usize>() else {
            continue;
        };

        let new_current = if current >= placeholder_position {
            current + 1
        } else {
            current
        };

        edits.push(Edit::new(
            whole.start(),
            whole.end(),
            format!(r#"<div class="slide-number">{new_current} / {new_total}</div>"#),
        ));
    }

    for found in DISPLAY_PLACEHOLDER_REGEX.find_iter(content) {
        edits.push(Edit::new(
            found.start(),
            found.end(),
            format!(
                r#"<div class="slide-number">{placeholder_position} / {new_total}</div>"#
            ),
        ));
    }

    let replacements = edits.len();
    let content = apply_edits(content, edits);
    log::info!("Updated {} slide number displays", replacements);

    UpdatedDisplays {
        content,
        replacements,
    }
}
