//! Local PDF reading.
//!
//! Thin adapter over `pdfplumber`: each page yields its text in reading
//! order and its lattice (fully ruled) tables as plain cell grids.

mod document;
mod error;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::{Page, PdfDocument, RawTable};
pub use error::PdfError;
