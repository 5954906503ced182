//! Table extraction backends and per-document backend selection.
//!
//! Two backends exist:
//!
//! - a cloud service behind [`CloudExtractor`], whose flattened tables are
//!   bucketed by [`StatementClassifier`](crate::classification::StatementClassifier)
//! - [`LocalExtractor`], which parses the PDF in-process and buckets tables
//!   itself using page text
//!
//! [`ExtractionOrchestrator`] picks one of them for each document.

mod cloud;
mod error;
mod local;
mod orchestrator;


pub use cloud::{CloudExtractor, NoCloud};
pub use error::ExtractionError;
pub use local::LocalExtractor;
pub use orchestrator::{Backend, Extraction, ExtractionOrchestrator};
