//! Domain types for slide renumbering results.

use serde::{Deserialize, Serialize};

/// Result of scanning a document for slide markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerScan {
    /// 1-based ordinal of the first placeholder marker in document order,
    /// or None if the document contains no placeholder.
    pub placeholder_position: Option<usize>,

    /// Total number of slide markers found, placeholder included.
    pub total_markers: usize,
}

impl MarkerScan {
    /// Whether the document contains a placeholder to renumber.
    pub fn has_placeholder(&self) -> bool {
        self.placeholder_position.is_some()
    }
}

/// Summary of a completed renumbering pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenumberReport {
    /// 1-based position where the new slide was inserted.
    pub placeholder_position: usize,

    /// Number of `data-slide` attribute values rewritten.
    pub marker_replacements: usize,

    /// Number of slide-number displays rewritten.
    pub display_replacements: usize,

    /// Slide count after the insertion.
    pub new_total: usize,
}

/// Outcome of a single run against a presentation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixOutcome {
    /// The file was renumbered and written back.
    Updated(RenumberReport),

    /// No placeholder marker was present; the file was left untouched.
    NoPlaceholder,
}

impl FixOutcome {
    /// Get the report if the run changed the file.
    pub fn report(&self) -> Option<&RenumberReport> {
        match self {
            Self::Updated(report) => Some(report),
            Self::NoPlaceholder => None,
        }
    }
}
