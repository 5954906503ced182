//! Cross-document merge of bucketed tables.

use tracing::debug;

use crate::buckets::StatementBuckets;
use crate::table::StatementCategory;

/// Accumulates per-document buckets for one upload batch.
///
/// Buckets are concatenated in the order documents are absorbed. Rows stay
/// opaque: nothing is deduplicated, reordered or parsed.
#[derive(Debug, Default)]
pub struct MergeAccumulator {
    aggregate: StatementBuckets,
    documents: Vec<String>,
}

impl MergeAccumulator {
    /// Creates an empty accumulator for a new batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one document's buckets into the aggregate.
    pub fn absorb(&mut self, filename: &str, buckets: StatementBuckets) {
        debug!(
            file = %filename,
            income = buckets.row_count(StatementCategory::Income),
            pl = buckets.row_count(StatementCategory::ProfitAndLoss),
            cashflow = buckets.row_count(StatementCategory::CashFlow),
            "Merging document rows"
        );
        self.aggregate.append(buckets);
        self.documents.push(filename.to_string());
    }

    /// Filenames absorbed so far, in upload order.
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Whether the aggregate holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aggregate.is_empty()
    }

    /// Consumes the accumulator, yielding the aggregate.
    #[must_use]
    pub fn finish(self) -> StatementBuckets {
        self.aggregate
    }
}

/// Merges a sequence of per-document buckets in order.
#[must_use]
pub fn merge_all<I>(documents: I) -> StatementBuckets
where
    I: IntoIterator<Item = StatementBuckets>,
{
    documents
        .into_iter()
        .fold(StatementBuckets::new(), |mut acc, next| {
            acc.append(next);
            acc
        })
}
