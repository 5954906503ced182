//! Extraction error types.

use thiserror::Error;

use crate::pdf::PdfError;

/// Errors raised while extracting tables from one document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The cloud backend is not configured or has no client.
    #[error("Cloud extraction unavailable: {0}")]
    Unavailable(String),

    /// The cloud backend was called and failed.
    #[error("Cloud extraction failed: {0}")]
    Transport(String),

    /// Local parsing failed.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// The blocking parse task did not complete.
    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl ExtractionError {
    /// Create an unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether this error means the cloud path should give way to local parsing.
    #[must_use]
    pub fn is_cloud_failure(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Transport(_))
    }
}
