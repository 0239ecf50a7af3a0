//! Error types for slide renumbering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fixing slide numbers.
#[derive(Error, Debug)]
pub enum Error {
    /// The target presentation file does not exist.
    #[error("File not found: {0}")]
    MissingFile(PathBuf),

    /// Failed to read or write the presentation file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),
}
