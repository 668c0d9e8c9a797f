//! Category spending breakdown
//!
//! Per-category expense totals for a single month, largest first. Feeds
//! the category pie chart.

use serde::Serialize;

use crate::models::{Money, Month, Transaction};

/// Default number of categories the breakdown keeps
pub const DEFAULT_TOP_N: usize = 10;

/// Expense totals per category for one month, sorted descending by total
///
/// Amounts are currency units exact to the cent. Categories with equal
/// totals keep the order in which they first appear in the transaction log,
/// so the output is fully deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// Category names, largest total first
    pub labels: Vec<String>,

    /// Total spent per category, aligned with `labels`
    pub amounts: Vec<f64>,
}

impl CategoryBreakdown {
    /// Sum expense transactions in the given month per category, keeping
    /// the `top_n` largest totals
    pub fn generate(transactions: &[Transaction], month: Month, top_n: usize) -> Self {
        // Accumulate in first-appearance order; a Vec keeps the scan order
        // that the stable sort below relies on for ties
        let mut totals: Vec<(String, Money)> = Vec::new();

        for txn in transactions
            .iter()
            .filter(|t| t.is_expense() && month.contains(t.date))
        {
            match totals.iter_mut().find(|(name, _)| name == &txn.category) {
                Some((_, total)) => *total += txn.amount,
                None => totals.push((txn.category.clone(), txn.amount)),
            }
        }

        totals.sort_by(|a, b| b.1.cmp(&a.1));
        totals.truncate(top_n);

        let labels = totals.iter().map(|(name, _)| name.clone()).collect();
        let amounts = totals.iter().map(|(_, total)| total.to_f64()).collect();

        Self { labels, amounts }
    }
}
