//! Table and statement category types.
//!
//! A [`Table`] is an opaque text grid: rows of trimmed cells where a missing
//! cell is the empty string. Column position is meaningful, so leading and
//! trailing empty cells are never removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of cell texts.
pub type Row = Vec<String>;

/// Financial statement category a table is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    /// Income statement.
    Income,
    /// Profit-and-loss report.
    ProfitAndLoss,
    /// Cash-flow statement.
    CashFlow,
}

impl StatementCategory {
    /// All categories in bucket order.
    pub const ALL: [Self; 3] = [Self::Income, Self::ProfitAndLoss, Self::CashFlow];

    /// Short machine name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::ProfitAndLoss => "pl",
            Self::CashFlow => "cashflow",
        }
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An extracted table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from already-clean rows, keeping them as they are.
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds a table from raw cells.
    ///
    /// Cells are trimmed, `None` becomes `""`, and rows whose cells are all
    /// empty are dropped. Returns `None` when nothing is left.
    #[must_use]
    pub fn from_raw_cells<R, C>(raw: R) -> Option<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = Option<String>>,
    {
        let rows: Vec<Row> = raw
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.map(|c| c.trim().to_string()).unwrap_or_default())
                    .collect::<Row>()
            })
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .collect();

        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    /// Rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lowercased first row, cells joined by a single space.
    #[must_use]
    pub fn header_signature(&self) -> String {
        self.rows
            .first()
            .map(|header| header.join(" ").to_lowercase())
            .unwrap_or_default()
    }
}
