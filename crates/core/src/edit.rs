//! Span-based text edits applied in reverse offset order.
//!
//! All rewriting stages compute their edits against the same pre-edit text,
//! so replacements that change length ("9" becomes "10") must be applied
//! from the highest start offset down to keep earlier spans valid.

/// A single replacement: a half-open byte span into the pre-edit text and
/// the string that takes its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte offset where the span begins.
    pub start: usize,

    /// Byte offset one past the end of the span.
    pub end: usize,

    /// Replacement text for the span.
    pub replacement: String,
}

impl Edit {
    /// Create an edit for the given byte span.
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }
}

/// Apply a batch of non-overlapping edits to `text`.
///
/// Edits may arrive in any order; they are sorted by start offset and applied
/// from the end of the document backward.
pub fn apply_edits(text: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by_key(|e| e.start);

    let mut result = text.to_string();
    for edit in edits.iter().rev() {
        result.replace_range(edit.start..edit.end, &edit.replacement);
    }
    result
}
