//! Error types for pathmark-core

/// Result type for pathmark-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pathmark-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from pathmark-fs
    #[error(transparent)]
    Fs(#[from] pathmark_fs::Error),

    /// Document or header error from pathmark-content
    #[error(transparent)]
    Content(#[from] pathmark_content::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
