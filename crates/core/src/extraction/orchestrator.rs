//! Per-document backend selection.

use std::fmt;

use tracing::{info, warn};

use super::cloud::{CloudExtractor, NoCloud};
use super::error::ExtractionError;
use super::local::LocalExtractor;
use crate::buckets::StatementBuckets;
use crate::classification::StatementClassifier;

/// Backend whose output was used for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Remote structured extraction.
    Cloud,
    /// In-process PDF parsing.
    Local,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cloud => "cloud",
            Self::Local => "local",
        })
    }
}

/// Bucketed tables from one document, alive until merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Source filename.
    pub filename: String,
    /// Backend that produced the buckets.
    pub backend: Backend,
    /// The document's tables.
    pub buckets: StatementBuckets,
}

/// Chooses exactly one backend per document.
///
/// The cloud backend is tried first when present. Its tables are used only
/// if the call succeeds with at least one table; otherwise the document is
/// parsed locally.
#[derive(Debug, Clone)]
pub struct ExtractionOrchestrator<C = NoCloud> {
    cloud: Option<C>,
}

impl ExtractionOrchestrator<NoCloud> {
    /// Orchestrator that always parses locally.
    #[must_use]
    pub fn local_only() -> Self {
        Self { cloud: None }
    }
}

impl<C: CloudExtractor> ExtractionOrchestrator<C> {
    /// Create an orchestrator. Pass `None` when cloud extraction is disabled
    /// or its client failed to initialize.
    #[must_use]
    pub fn new(cloud: Option<C>) -> Self {
        Self { cloud }
    }

    /// Whether a cloud client is present.
    #[must_use]
    pub fn has_cloud(&self) -> bool {
        self.cloud.is_some()
    }

    /// Extracts and buckets one document.
    ///
    /// Cloud failures are logged and never returned. The only error is a
    /// local parse failure.
    pub async fn extract(
        &self,
        filename: &str,
        pdf: Vec<u8>,
    ) -> Result<Extraction, ExtractionError> {
        if let Some(cloud) = &self.cloud {
            match cloud.extract_tables(&pdf).await {
                Ok(tables) if !tables.is_empty() => {
                    info!(file = %filename, tables = tables.len(), "Using cloud extraction");
                    return Ok(Extraction {
                        filename: filename.to_string(),
                        backend: Backend::Cloud,
                        buckets: StatementClassifier::classify(tables),
                    });
                }
                Ok(_) => {
                    info!(file = %filename, "Cloud extraction found no tables, falling back to local parsing");
                }
                Err(e) => {
                    warn!(file = %filename, error = %e, "Cloud extraction failed, falling back to local parsing");
                }
            }
        }

        info!(file = %filename, "Using local extraction");
        let buckets = tokio::task::spawn_blocking(move || LocalExtractor::extract(&pdf))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??;

        Ok(Extraction {
            filename: filename.to_string(),
            backend: Backend::Local,
            buckets,
        })
    }
}
