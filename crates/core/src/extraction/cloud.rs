//! Cloud table extraction capability.

use std::future::Future;

use super::error::ExtractionError;
use crate::table::Table;

/// A remote structured-extraction service.
///
/// Implemented by the Document AI crate. An `Err` means the service could
/// not be used for this document; `Ok` with an empty list means it was used
/// and found nothing. Both send the orchestrator to the local backend.
pub trait CloudExtractor: Send + Sync {
    /// Extract flattened tables from a PDF.
    fn extract_tables(
        &self,
        pdf: &[u8],
    ) -> impl Future<Output = Result<Vec<Table>, ExtractionError>> + Send;
}

/// Cloud backend that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCloud;

impl CloudExtractor for NoCloud {
    async fn extract_tables(&self, _pdf: &[u8]) -> Result<Vec<Table>, ExtractionError> {
        Err(ExtractionError::unavailable("no cloud backend configured"))
    }
}
