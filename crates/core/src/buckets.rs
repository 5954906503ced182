//! Per-category table buckets.

use crate::table::{Row, StatementCategory, Table};

/// Tables filed by statement category, each bucket in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementBuckets {
    income: Vec<Table>,
    profit_and_loss: Vec<Table>,
    cash_flow: Vec<Table>,
}

impl StatementBuckets {
    /// Creates empty buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a table under `category`.
    pub fn push(&mut self, category: StatementCategory, table: Table) {
        self.bucket_mut(category).push(table);
    }

    /// Tables of one category.
    #[must_use]
    pub fn tables(&self, category: StatementCategory) -> &[Table] {
        match category {
            StatementCategory::Income => &self.income,
            StatementCategory::ProfitAndLoss => &self.profit_and_loss,
            StatementCategory::CashFlow => &self.cash_flow,
        }
    }

    fn bucket_mut(&mut self, category: StatementCategory) -> &mut Vec<Table> {
        match category {
            StatementCategory::Income => &mut self.income,
            StatementCategory::ProfitAndLoss => &mut self.profit_and_loss,
            StatementCategory::CashFlow => &mut self.cash_flow,
        }
    }

    /// Rows of one category, tables flattened in order.
    pub fn rows(&self, category: StatementCategory) -> impl Iterator<Item = &Row> {
        self.tables(category).iter().flat_map(Table::rows)
    }

    /// Number of rows filed under one category.
    #[must_use]
    pub fn row_count(&self, category: StatementCategory) -> usize {
        self.tables(category).iter().map(Table::len).sum()
    }

    /// Total number of tables across all categories.
    #[must_use]
    pub fn table_count(&self) -> usize {
        StatementCategory::ALL
            .iter()
            .map(|c| self.tables(*c).len())
            .sum()
    }

    /// Whether every bucket is free of rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        StatementCategory::ALL
            .iter()
            .all(|c| self.row_count(*c) == 0)
    }

    /// Appends every bucket of `other` after the matching bucket of `self`.
    pub fn append(&mut self, other: Self) {
        self.income.extend(other.income);
        self.profit_and_loss.extend(other.profit_and_loss);
        self.cash_flow.extend(other.cash_flow);
    }
}
