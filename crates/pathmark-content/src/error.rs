//! Error types for pathmark-content

use std::ops::Range;

/// Result type for pathmark-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pathmark-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid header pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Edits overlap at byte range {0:?}")]
    OverlappingEdits(Range<usize>),
}
