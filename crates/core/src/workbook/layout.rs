//! Sheet layout, independent of the file format.
//!
//! A [`SheetPlan`] is the finished grid for one sheet: the spacer row, the
//! group's rows, which row gets header styling and how wide each column is.

use crate::buckets::StatementBuckets;
use crate::table::{Row, StatementCategory};

/// Name of the sheet holding income and profit-and-loss rows.
pub const INCOME_SHEET: &str = "Income Statement";
/// Name of the sheet holding cash-flow rows.
pub const CASH_FLOW_SHEET: &str = "Cash Flow Statement";

/// Row index, 0-based, that receives header styling.
pub const HEADER_ROW: usize = 1;
/// Padding added to the longest cell in a column.
pub const COLUMN_PADDING: usize = 2;
/// Upper bound on a column's width, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// A rendering group: one sheet fed by one or more categories.
#[derive(Debug, Clone, Copy)]
pub struct SheetGroup {
    /// Sheet name.
    pub name: &'static str,
    /// Categories whose rows fill the sheet, concatenated in this order.
    pub categories: &'static [StatementCategory],
}

/// Groups in sheet order.
pub const SHEET_GROUPS: [SheetGroup; 2] = [
    SheetGroup {
        name: INCOME_SHEET,
        categories: &[StatementCategory::Income, StatementCategory::ProfitAndLoss],
    },
    SheetGroup {
        name: CASH_FLOW_SHEET,
        categories: &[StatementCategory::CashFlow],
    },
];

/// Laid-out contents of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    /// Sheet name.
    pub name: &'static str,
    /// Rows to write; row 0 is the empty spacer.
    pub rows: Vec<Row>,
    /// Row that receives header styling, if the sheet has one.
    pub header_row: Option<usize>,
    /// Width of each column in characters.
    pub column_widths: Vec<f64>,
}

impl SheetPlan {
    /// Number of columns spanned by the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Lays out one sheet per non-empty group.
#[must_use]
pub fn plan_sheets(buckets: &StatementBuckets) -> Vec<SheetPlan> {
    SHEET_GROUPS
        .iter()
        .filter_map(|group| plan_group(group, buckets))
        .collect()
}

fn plan_group(group: &SheetGroup, buckets: &StatementBuckets) -> Option<SheetPlan> {
    let body: Vec<Row> = group
        .categories
        .iter()
        .flat_map(|category| buckets.rows(*category).cloned())
        .collect();
    if body.is_empty() {
        return None;
    }

    let mut rows = Vec::with_capacity(body.len() + 1);
    rows.push(Row::new());
    rows.extend(body);

    let mut plan = SheetPlan {
        name: group.name,
        rows,
        header_row: None,
        column_widths: Vec::new(),
    };
    apply_header_style(&mut plan);
    plan.column_widths = column_widths(&plan.rows);
    Some(plan)
}

/// Marks the row after the spacer as the header, whatever it contains.
fn apply_header_style(plan: &mut SheetPlan) {
    if plan.rows.len() > HEADER_ROW {
        plan.header_row = Some(HEADER_ROW);
    }
}

/// Longest cell per column plus padding, capped.
fn column_widths(rows: &[Row]) -> Vec<f64> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|col| {
            let longest = rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            (longest + COLUMN_PADDING).min(MAX_COLUMN_WIDTH) as f64
        })
        .collect()
}
