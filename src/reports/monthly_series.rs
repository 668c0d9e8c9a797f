//! Monthly income/expense series
//!
//! Per-month totals over a window of consecutive calendar months, split by
//! transaction kind. Feeds the income-vs-expenses bar chart.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Income and expense totals for consecutive months, oldest first
///
/// Totals are currency units exact to the cent (sums are computed in
/// integer cents and divided by 100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    /// Month labels, e.g. "Jan 2024", oldest first
    pub labels: Vec<String>,

    /// Expense total per month, aligned with `labels`
    pub expense_totals: Vec<f64>,

    /// Income total per month, aligned with `labels`
    pub income_totals: Vec<f64>,
}

impl MonthlySeries {
    /// Build totals for `month_count` consecutive calendar months ending at
    /// the anchor date's month
    pub fn generate(
        transactions: &[Transaction],
        month_count: usize,
        anchor: NaiveDate,
    ) -> Self {
        let mut labels = Vec::with_capacity(month_count);
        let mut expense_totals = Vec::with_capacity(month_count);
        let mut income_totals = Vec::with_capacity(month_count);

        // Walk back to the oldest month of the window, then forward
        let mut month = Month::from_date(anchor);
        for _ in 1..month_count {
            month = month.prev();
        }

        for _ in 0..month_count {
            let mut expenses = Money::zero();
            let mut income = Money::zero();

            for txn in transactions.iter().filter(|t| month.contains(t.date)) {
                match txn.kind {
                    TransactionKind::Expense => expenses += txn.amount,
                    TransactionKind::Income => income += txn.amount,
                }
            }

            labels.push(month.label());
            expense_totals.push(expenses.to_f64());
            income_totals.push(income.to_f64());

            month = month.next();
        }

        Self {
            labels,
            expense_totals,
            income_totals,
        }
    }
}
