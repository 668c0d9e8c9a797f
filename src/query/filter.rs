//! Transaction filter and chronological view
//!
//! Applies kind and category filters to a transaction slice and orders the
//! result by date descending. Equal-date records keep their insertion
//! order (stable sort), so the view is fully deterministic.

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// How many entries the "recent transactions" view shows
pub const RECENT_LIMIT: usize = 5;

/// Filter options for transaction views
///
/// A `None` field means "all" - no restriction on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Restrict to a single transaction kind
    pub kind: Option<TransactionKind>,

    /// Restrict to a single category name
    pub category: Option<String>,
}

impl TransactionFilter {
    /// The all/all filter: every transaction matches
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a transaction kind
    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check if a transaction matches this filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }

        true
    }
}

/// Produce a filtered view of the transaction log, sorted by date descending
///
/// The sort is stable: transactions sharing a date appear in their original
/// insertion order. Returns a new vector; the input slice is never mutated.
pub fn select_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut selected: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.date.cmp(&a.date));
    selected
}

/// The filtered view truncated to its `RECENT_LIMIT` most recent entries
pub fn recent_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    let mut selected = select_transactions(transactions, filter);
    selected.truncate(RECENT_LIMIT);
    selected
}
