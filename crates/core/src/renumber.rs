//! Renumbering `data-slide` attribute values after an insertion.

use crate::edit::{apply_edits, Edit};
use crate::scan::{PLACEHOLDER, SLIDE_MARKER_REGEX};

/// Result of rewriting the slide marker attributes.
#[derive(Debug, Clone)]
pub struct RenumberedMarkers {
    /// Document text with updated marker values.
    pub content: String,

    /// Slide count after the insertion.
    pub new_total: usize,

    /// Number of marker values rewritten.
    pub replacements: usize,
}

/// Renumber slide markers around the insertion position.
///
/// Re-scans all markers in document order. A placeholder value becomes the
/// decimal form of its own ordinal (the inserted slide is numbered by where
/// it physically sits). A numeric value at or after `placeholder_position`
/// is incremented by one. Values that are neither the placeholder nor a
/// plain number are left untouched.
///
/// The new total is `total_markers` or the largest incremented value,
/// whichever is greater; `total_markers` already counts the placeholder, so
/// the total is correct even when the new slide is the last one.
pub fn renumber_markers(
    content: &str,
    placeholder_position: usize,
    total_markers: usize,
) -> RenumberedMarkers {
    let mut edits = Vec::new();
    let mut new_total = total_markers;

    for (idx, captures) in SLIDE_MARKER_REGEX.captures_iter(content).enumerate() {
        let Some(group) = captures.get(1) else {
            continue;
        };
        let position = idx + 1;

        if group.as_str() == PLACEHOLDER {
            edits.push(Edit::new(group.start(), group.end(), position.to_string()));
        } else if let Ok(number) = group.as_str().parse::<usize>() {
            if number >= placeholder_position {
                let incremented = number + 1;
                edits.push(Edit::new(group.start(), group.end(), incremented.to_string()));
                new_total = new_total.max(incremented);
            }
        }
    }

    let replacements = edits.len();
    let content = apply_edits(content, edits);
    log::info!("Updated {} slide data-slide attributes", replacements);

    RenumberedMarkers {
        content,
        new_total,
        replacements,
    }
}
