//! Slide marker renumbering for static HTML presentations.
//!
//! After a new slide is inserted with `data-slide="x"`, this crate shifts
//! the slide numbers that follow it, updates the visible "current / total"
//! displays, and rewrites the JavaScript `totalSlides` constant. The
//! document is rewritten as plain text via targeted span edits; markup
//! outside the matched substrings is preserved byte for byte.

pub mod constant;
pub mod display;
pub mod edit;
pub mod error;
pub mod pipeline;
pub mod renumber;
pub mod scan;
pub mod types;

pub use error::{Error, Result};
pub use pipeline::{fix_slide_numbers, renumber_document};
pub use scan::{scan_markers, PLACEHOLDER};
pub use types::{FixOutcome, MarkerScan, RenumberReport};
