//! Monthly summary totals
//!
//! Income, expense, and balance totals for one month, with transaction
//! counts. Feeds the dashboard summary cards.

use serde::Serialize;

use crate::models::{Money, Month, Transaction, TransactionKind};

/// Totals and counts for a single month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    /// Sum of income amounts (exact to the cent)
    pub total_income: Money,

    /// Sum of expense amounts (exact to the cent)
    pub total_expense: Money,

    /// Income minus expenses; negative when the month overspent
    pub balance: Money,

    /// Number of income transactions
    pub income_count: usize,

    /// Number of expense transactions
    pub expense_count: usize,
}

impl MonthlySummary {
    /// Sum the transactions falling within the given month
    pub fn generate(transactions: &[Transaction], month: Month) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut income_count = 0;
        let mut expense_count = 0;

        for txn in transactions.iter().filter(|t| month.contains(t.date)) {
            match txn.kind {
                TransactionKind::Income => {
                    total_income += txn.amount;
                    income_count += 1;
                }
                TransactionKind::Expense => {
                    total_expense += txn.amount;
                    expense_count += 1;
                }
            }
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            income_count,
            expense_count,
        }
    }
}
