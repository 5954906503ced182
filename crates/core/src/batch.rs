//! One upload batch, end to end.
//!
//! Files are handled strictly one after another. Each accepted file is
//! staged on disk, extracted, merged and unstaged before the next begins.
//! A file that fails to stage or extract contributes nothing; only an empty
//! aggregate or a render failure fails the batch.

use thiserror::Error;
use tracing::{info, warn};

use crate::extraction::{CloudExtractor, ExtractionOrchestrator, NoCloud};
use crate::merge::MergeAccumulator;
use crate::upload::{UploadStore, UploadedFile};
use crate::workbook::{RenderError, WorkbookRenderer};

/// Batch-level failures.
#[derive(Debug, Error)]
pub enum BatchError {
    /// No document produced any row.
    #[error("No financial data extracted from PDFs")]
    NoDataExtracted,

    /// The merged workbook could not be built.
    #[error("Error creating Excel file: {0}")]
    Render(RenderError),
}

impl From<RenderError> for BatchError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::NoData => Self::NoDataExtracted,
            other => Self::Render(other),
        }
    }
}

/// Result of a successful batch.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// XLSX bytes.
    pub workbook: Vec<u8>,
    /// Sanitized names of the documents that were extracted, in order.
    pub documents: Vec<String>,
}

/// Runs upload batches.
#[derive(Debug, Clone)]
pub struct BatchProcessor<C = NoCloud> {
    orchestrator: ExtractionOrchestrator<C>,
    store: UploadStore,
}

impl<C: CloudExtractor> BatchProcessor<C> {
    /// Create a batch processor.
    #[must_use]
    pub fn new(orchestrator: ExtractionOrchestrator<C>, store: UploadStore) -> Self {
        Self {
            orchestrator,
            store,
        }
    }

    /// The orchestrator used per document.
    #[must_use]
    pub fn orchestrator(&self) -> &ExtractionOrchestrator<C> {
        &self.orchestrator
    }

    /// The upload store.
    #[must_use]
    pub fn store(&self) -> &UploadStore {
        &self.store
    }

    /// Processes `files` in order and renders the merged workbook.
    ///
    /// Files without an allowed extension are skipped silently.
    pub async fn process(&self, files: Vec<UploadedFile>) -> Result<BatchOutput, BatchError> {
        let mut accumulator = MergeAccumulator::new();

        for file in files {
            if !self.store.is_allowed(&file.filename) {
                info!(file = %file.filename, "Skipping file with unsupported extension");
                continue;
            }

            let staged = match self.store.stage(&file) {
                Ok(staged) => staged,
                Err(e) => {
                    warn!(file = %file.filename, error = %e, "Failed to stage upload");
                    continue;
                }
            };
            drop(file);

            let filename = staged.filename().to_string();
            let result = match staged.read() {
                Ok(bytes) => self
                    .orchestrator
                    .extract(&filename, bytes)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            staged.close();

            match result {
                Ok(extraction) => {
                    info!(file = %extraction.filename, backend = %extraction.backend, "Processed document");
                    accumulator.absorb(&extraction.filename, extraction.buckets);
                }
                Err(e) => warn!(file = %filename, error = %e, "Error processing document"),
            }
        }

        if accumulator.is_empty() {
            return Err(BatchError::NoDataExtracted);
        }

        let documents = accumulator.documents().to_vec();
        let aggregate = accumulator.finish();
        let workbook = WorkbookRenderer::render(&aggregate)?;
        info!(documents = documents.len(), bytes = workbook.len(), "Rendered merged workbook");

        Ok(BatchOutput {
            workbook,
            documents,
        })
    }
}
