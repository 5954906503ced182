//! Local extraction backend.
//!
//! Reads ruled tables page by page and routes each one using its header row
//! and, failing that, the text of the page it sits on.

use tracing::{debug, trace};

use super::error::ExtractionError;
use crate::buckets::StatementBuckets;
use crate::classification::route_page_table;
use crate::pdf::PdfDocument;
use crate::table::Table;

/// Parses PDFs in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExtractor;

impl LocalExtractor {
    /// Extracts and buckets every table in `pdf`.
    ///
    /// Pages without text are skipped. A page that cannot be read fails the
    /// whole document. CPU-bound; call from a blocking context.
    pub fn extract(pdf: &[u8]) -> Result<StatementBuckets, ExtractionError> {
        let document = PdfDocument::load(pdf)?;
        let mut buckets = StatementBuckets::new();

        for page in document.pages() {
            let page = page?;
            if page.text.trim().is_empty() {
                trace!(page = page.number, "Skipping page without text");
                continue;
            }

            let page_text = page.text.to_lowercase();
            for raw in page.tables {
                let Some(table) = Table::from_raw_cells(raw) else {
                    continue;
                };
                match route_page_table(&table, &page_text) {
                    Some(category) => {
                        trace!(page = page.number, %category, rows = table.len(), "Routed table");
                        buckets.push(category, table);
                    }
                    None => debug!(page = page.number, "Dropped unmatched table"),
                }
            }
        }

        Ok(buckets)
    }
}
