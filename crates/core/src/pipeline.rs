//! The end-to-end renumbering pipeline.
//!
//! One read at the start, one write at the very end. Every stage in between
//! is a pure text transformation, so a failure anywhere leaves the file
//! exactly as it was.

use crate::constant::update_total_constant;
use crate::display::update_displays;
use crate::error::{Error, Result};
use crate::renumber::renumber_markers;
use crate::scan::scan_markers;
use crate::{FixOutcome, RenumberReport};
use std::fs;
use std::path::Path;

/// Run the full transformation over in-memory document text.
///
/// Returns the rewritten text and a report, or None when the document
/// contains no placeholder marker (nothing to fix).
pub fn renumber_document(content: &str) -> Option<(String, RenumberReport)> {
    let scan = scan_markers(content);
    let placeholder_position = scan.placeholder_position?;

    let markers = renumber_markers(content, placeholder_position, scan.total_markers);
    let displays = update_displays(&markers.content, placeholder_position, markers.new_total);
    let content = update_total_constant(&displays.content, markers.new_total);

    let report = RenumberReport {
        placeholder_position,
        marker_replacements: markers.replacements,
        display_replacements: displays.replacements,
        new_total: markers.new_total,
    };
    Some((content, report))
}

/// Fix slide numbering in the presentation file at `path`.
///
/// Fails before any read if the file does not exist. When the file holds no
/// placeholder the run is a neutral no-op: the file is read but never
/// written. Otherwise the fully transformed text is written back to the same
/// path in a single write.
pub fn fix_slide_numbers(path: &Path) -> Result<FixOutcome> {
    if !path.exists() {
        log::error!("File not found: {}", path.display());
        return Err(Error::MissingFile(path.to_path_buf()));
    }

    log::info!("Reading file: {}", path.display());
    let content = fs::read_to_string(path)?;

    let Some((content, report)) = renumber_document(&content) else {
        log::info!("No slide '{}' found. Nothing to fix.", crate::PLACEHOLDER);
        return Ok(FixOutcome::NoPlaceholder);
    };

    log::info!("Writing updated content to: {}", path.display());
    fs::write(path, content)?;

    log::info!(
        "Successfully fixed slide numbers. Total slides: {}",
        report.new_total
    );
    Ok(FixOutcome::Updated(report))
}
