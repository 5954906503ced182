//! Output workbook.
//!
//! Layout is decided first as plain data ([`SheetPlan`]), then written out
//! with `rust_xlsxwriter`. Header styling is positional: the row right after
//! the blank spacer is styled whatever it holds.

mod error;
mod layout;
mod render;

pub use error::RenderError;
pub use layout::{
    CASH_FLOW_SHEET, COLUMN_PADDING, HEADER_ROW, INCOME_SHEET, MAX_COLUMN_WIDTH, SHEET_GROUPS,
    SheetGroup, SheetPlan, plan_sheets,
};
pub use render::{HEADER_FILL, WorkbookRenderer};

/// MIME type of the rendered workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download name of the merged workbook.
pub const MERGED_FILENAME: &str = "financial_statements_merged.xlsx";
