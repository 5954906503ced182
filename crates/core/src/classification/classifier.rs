//! Statement classifier for flattened tables.

use tracing::trace;

use super::rules::{CLOUD_RULES, LOCAL_RULES, Outcome, RuleInput, evaluate};
use crate::buckets::StatementBuckets;
use crate::table::{StatementCategory, Table};

/// Classifies tables that arrive without page context.
pub struct StatementClassifier;

impl StatementClassifier {
    /// Category for a single table, judged by its header row alone.
    ///
    /// Falls back to profit-and-loss when no keyword matches.
    #[must_use]
    pub fn categorize(table: &Table) -> StatementCategory {
        let header = table.header_signature();
        let input = RuleInput {
            header: &header,
            page_text: None,
        };
        match evaluate(CLOUD_RULES, &input) {
            Outcome::Assign(category) => category,
            // The cloud list ends with an unconditional assignment.
            Outcome::Drop => StatementCategory::ProfitAndLoss,
        }
    }

    /// Files every non-empty table into its bucket, preserving order.
    #[must_use]
    pub fn classify(tables: Vec<Table>) -> StatementBuckets {
        let mut buckets = StatementBuckets::new();
        for table in tables {
            if table.is_empty() {
                continue;
            }
            let category = Self::categorize(&table);
            trace!(%category, rows = table.len(), "Classified table");
            buckets.push(category, table);
        }
        buckets
    }
}

/// Routes a table found on a page, using the page text as a second signal.
///
/// Returns `None` when the table should be dropped.
#[must_use]
pub fn route_page_table(table: &Table, page_text_lower: &str) -> Option<StatementCategory> {
    let header = table.header_signature();
    let input = RuleInput {
        header: &header,
        page_text: Some(page_text_lower),
    };
    match evaluate(LOCAL_RULES, &input) {
        Outcome::Assign(category) => Some(category),
        Outcome::Drop => None,
    }
}
