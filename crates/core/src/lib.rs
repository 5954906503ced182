//! Core pipeline logic for finmerge.
//!
//! This crate turns uploaded financial-statement PDFs into one merged
//! workbook. It has ZERO web dependencies; the HTTP layer and the Document AI
//! client live in their own crates.
//!
//! # Modules
//!
//! - `pdf` - Local PDF parsing: page text and lattice tables via `pdfplumber`
//! - `extraction` - Cloud/local backends and per-document backend selection
//! - `classification` - Ordered keyword rules that bucket tables
//! - `merge` - Cross-document concatenation of buckets
//! - `workbook` - Sheet layout and XLSX rendering
//! - `upload` - Filename rules and scoped on-disk staging
//! - `batch` - One upload batch, end to end

pub mod batch;
pub mod buckets;
pub mod classification;
pub mod extraction;
pub mod merge;
pub mod pdf;
pub mod table;
pub mod upload;
pub mod workbook;

pub use batch::{BatchError, BatchOutput, BatchProcessor};
pub use buckets::StatementBuckets;
pub use extraction::{CloudExtractor, ExtractionError, ExtractionOrchestrator};
pub use table::{Row, StatementCategory, Table};
