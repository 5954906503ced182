//! Wire types for the `processors:process` REST call.
//!
//! Only the fields needed to rebuild tables are modelled. Every collection
//! defaults to empty because the service omits empty fields.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// MIME type sent with every document.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// Inline document.
    pub raw_document: RawDocument,
}

/// Inline document content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    /// Base64-encoded bytes.
    pub content: String,
    /// MIME type of `content`.
    pub mime_type: &'static str,
}

/// Response body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    /// Processed document.
    #[serde(default)]
    pub document: Document,
}

/// A processed document.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full text; text anchors index into it.
    #[serde(default)]
    pub text: String,
    /// Pages in order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// One page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Detected tables.
    #[serde(default)]
    pub tables: Vec<DocTable>,
}

/// One detected table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocTable {
    /// Header rows.
    #[serde(default)]
    pub header_rows: Vec<TableRow>,
    /// Body rows.
    #[serde(default)]
    pub body_rows: Vec<TableRow>,
}

/// A table row.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells left to right.
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

/// A table cell.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Where the cell's text lives.
    #[serde(default)]
    pub layout: Layout,
}

/// Layout of an element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Text anchor.
    #[serde(default)]
    pub text_anchor: TextAnchor,
}

/// Spans of [`Document::text`] belonging to an element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnchor {
    /// Segments in order.
    #[serde(default)]
    pub text_segments: Vec<TextSegment>,
}

/// Half-open character range into [`Document::text`].
///
/// int64 fields arrive as JSON strings; plain numbers are accepted too.
#[serde_as]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    /// Start, inclusive. Omitted when zero.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub start_index: u64,
    /// End, exclusive.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    #[serde(default)]
    pub end_index: u64,
}
