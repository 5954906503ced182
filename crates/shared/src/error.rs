//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or incomplete request.
    #[error("{0}")]
    Validation(String),

    /// Request body exceeds the configured ceiling.
    #[error("Request too large: {0}")]
    PayloadTooLarge(String),

    /// No document in the batch yielded any table rows.
    #[error("No financial data extracted from PDFs")]
    NoDataExtracted,

    /// The merged workbook could not be produced.
    #[error("Error creating Excel file: {0}")]
    Render(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::NoDataExtracted => 400,
            Self::PayloadTooLarge(_) => 413,
            Self::Render(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::NoDataExtracted => "NO_DATA_EXTRACTED",
            Self::Render(_) => "RENDER_FAILED",
        }
    }
}
