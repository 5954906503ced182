//! Page-level access to a PDF held in memory.

use pdfplumber::{Pdf, Strategy, TableSettings, TextOptions};

use super::error::PdfError;

/// Cell grid of one detected table, top row first. `None` marks a cell
/// with no text in it.
pub type RawTable = Vec<Vec<Option<String>>>;

/// Text and tables read from one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Page text in reading order.
    pub text: String,
    /// Ruled tables, top of page first.
    pub tables: Vec<RawTable>,
}

/// A parsed PDF document.
pub struct PdfDocument {
    inner: Pdf,
    settings: TableSettings,
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("pages", &self.page_count())
            .finish_non_exhaustive()
    }
}

impl PdfDocument {
    /// Parses a PDF from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Parse`] if the bytes are not a readable PDF.
    pub fn load(bytes: &[u8]) -> Result<Self, PdfError> {
        let inner = Pdf::open(bytes, None).map_err(PdfError::Parse)?;
        Ok(Self {
            inner,
            settings: TableSettings {
                strategy: Strategy::Lattice,
                ..TableSettings::default()
            },
        })
    }

    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    /// Reads every page in order.
    ///
    /// Each item fails independently, so callers decide whether one broken
    /// page spoils the document.
    pub fn pages(&self) -> impl Iterator<Item = Result<Page, PdfError>> + '_ {
        (0..self.page_count()).map(|index| self.read_page(index))
    }

    fn read_page(&self, index: usize) -> Result<Page, PdfError> {
        let number = index + 1;
        let page = self.inner.page(index).map_err(|source| PdfError::Page {
            page: number,
            source,
        })?;

        let tables = page
            .find_tables(&self.settings)
            .into_iter()
            .map(|table| {
                table
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(|cell| cell.text).collect())
                    .collect()
            })
            .collect();

        Ok(Page {
            number,
            text: page.extract_text(&TextOptions::default()),
            tables,
        })
    }
}
