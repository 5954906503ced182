//! Upload staging error types.

use thiserror::Error;

/// Errors raised while staging an uploaded file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Filename has no allowed extension.
    #[error("file type not allowed: {filename}")]
    NotAllowed {
        /// The rejected filename.
        filename: String,
    },

    /// Upload directory could not be prepared.
    #[error("upload directory error: {0}")]
    Directory(String),

    /// Writing or reading the staged file failed.
    #[error("upload I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Create a not-allowed error.
    #[must_use]
    pub fn not_allowed(filename: impl Into<String>) -> Self {
        Self::NotAllowed {
            filename: filename.into(),
        }
    }
}
