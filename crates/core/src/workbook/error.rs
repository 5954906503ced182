//! Workbook rendering errors.

use thiserror::Error;

/// Errors raised while building the output workbook.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Every rendering group was empty.
    #[error("No financial data extracted from PDFs")]
    NoData,

    /// A sheet exceeds what the file format can hold.
    #[error("Sheet '{sheet}' has too many rows or columns")]
    TooLarge {
        /// Sheet name.
        sheet: &'static str,
    },

    /// The writer rejected a cell or failed to serialize.
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
