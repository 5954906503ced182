//! PDF parsing error types.

use thiserror::Error;

/// Errors raised while reading a PDF locally.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The document could not be opened at all.
    #[error("failed to parse PDF: {0}")]
    Parse(#[source] pdfplumber::PdfError),

    /// A single page could not be interpreted.
    #[error("failed to read page {page}: {source}")]
    Page {
        /// 1-based page number.
        page: usize,
        /// Underlying failure.
        #[source]
        source: pdfplumber::PdfError,
    },
}
