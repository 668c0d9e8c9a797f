//! Budget-vs-actual comparison
//!
//! Pairs each budget for a month with the actual spending in its category,
//! and classifies spending against the ceiling. Feeds the budget bar chart
//! and the budget status table.

use serde::Serialize;
use std::fmt;

use crate::models::{Budget, Money, Month, Transaction};

/// Qualitative classification of actual spend against a budgeted ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    UnderBudget,
    ApproachingLimit,
    OverBudget,
}

impl BudgetStatus {
    /// Classify actual spending against a budgeted ceiling
    ///
    /// Over budget when actual exceeds budgeted (strict); approaching the
    /// limit when actual/budgeted >= 0.90. The ratio is evaluated in
    /// integer cents (10 * actual >= 9 * budgeted), so there is no float
    /// division and no cent-boundary surprises. A zero ceiling cannot be
    /// divided by and is special-cased: any spending at all is over budget.
    pub fn classify(budgeted: Money, actual: Money) -> Self {
        if budgeted.is_zero() {
            return if actual.is_positive() {
                Self::OverBudget
            } else {
                Self::UnderBudget
            };
        }

        if actual > budgeted {
            Self::OverBudget
        } else if 10 * actual.cents() >= 9 * budgeted.cents() {
            Self::ApproachingLimit
        } else {
            Self::UnderBudget
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnderBudget => write!(f, "Under budget"),
            Self::ApproachingLimit => write!(f, "Approaching limit"),
            Self::OverBudget => write!(f, "Over budget"),
        }
    }
}

/// Budgeted and actual amounts per category for one month
///
/// Rows follow the budget collection's insertion order. Empty when no
/// budget covers the month - a renderable "no data" state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    /// Budgeted category names, in budget insertion order
    pub labels: Vec<String>,

    /// Budget ceiling per category, aligned with `labels`
    pub budgeted: Vec<f64>,

    /// Actual expense total per category, aligned with `labels`
    pub actual: Vec<f64>,
}

impl BudgetComparison {
    /// Pair each budget covering the month with the actual expense total
    /// for its category in that month
    pub fn generate(budgets: &[Budget], transactions: &[Transaction], month: Month) -> Self {
        let mut labels = Vec::new();
        let mut budgeted = Vec::new();
        let mut actual = Vec::new();

        for budget in budgets.iter().filter(|b| b.month == month) {
            let spent: Money = transactions
                .iter()
                .filter(|t| t.is_expense() && t.category == budget.category && month.contains(t.date))
                .map(|t| t.amount)
                .sum();

            labels.push(budget.category.clone());
            budgeted.push(budget.amount.to_f64());
            actual.push(spent.to_f64());
        }

        Self {
            labels,
            budgeted,
            actual,
        }
    }

    /// Check if no budget covered the requested month
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Remaining headroom per row (budgeted minus actual; negative when
    /// overspent)
    pub fn remaining(&self) -> Vec<f64> {
        self.budgeted
            .iter()
            .zip(&self.actual)
            .map(|(b, a)| Money::from_f64(b - a).to_f64())
            .collect()
    }

    /// Budget status per row
    pub fn statuses(&self) -> Vec<BudgetStatus> {
        self.budgeted
            .iter()
            .zip(&self.actual)
            .map(|(b, a)| BudgetStatus::classify(Money::from_f64(*b), Money::from_f64(*a)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetDraft, TransactionDraft, TransactionKind};
    use crate::store::Ledger;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_expense(ledger: &mut Ledger, date: NaiveDate, category: &str, cents: i64) {
        ledger
            .add_transaction(TransactionDraft::new(
                TransactionKind::Expense,
                Money::from_cents(cents),
                date,
                "",
                category,
            ))
            .unwrap();
    }

    fn add_budget(ledger: &mut Ledger, category: &str, cents: i64, month: Month) {
        ledger
            .add_or_update_budget(BudgetDraft::new(category, Money::from_cents(cents), month))
            .unwrap();
    }

    #[test]
    fn test_classify_thresholds() {
        let units = Money::from_units;
        assert_eq!(
            BudgetStatus::classify(units(100), units(90)),
            BudgetStatus::ApproachingLimit
        );
        assert_eq!(
            BudgetStatus::classify(units(100), Money::from_cents(10001)),
            BudgetStatus::OverBudget
        );
        assert_eq!(
            BudgetStatus::classify(units(100), Money::from_cents(8999)),
            BudgetStatus::UnderBudget
        );
        assert_eq!(
            BudgetStatus::classify(units(100), units(100)),
            BudgetStatus::ApproachingLimit
        );
    }

    #[test]
    fn test_classify_zero_ceiling() {
        assert_eq!(
            BudgetStatus::classify(Money::zero(), Money::zero()),
            BudgetStatus::UnderBudget
        );
        assert_eq!(
            BudgetStatus::classify(Money::zero(), Money::from_units(5)),
            BudgetStatus::OverBudget
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BudgetStatus::UnderBudget.to_string(), "Under budget");
        assert_eq!(
            BudgetStatus::ApproachingLimit.to_string(),
            "Approaching limit"
        );
        assert_eq!(BudgetStatus::OverBudget.to_string(), "Over budget");
    }

    #[test]
    fn test_food_budget_scenario() {
        let month = Month::new(2024, 3);
        let mut ledger = Ledger::new();
        add_budget(&mut ledger, "Food", 20000, month);
        add_expense(&mut ledger, date(2024, 3, 5), "Food", 12000);
        add_expense(&mut ledger, date(2024, 3, 20), "Food", 6550);

        let comparison = BudgetComparison::generate(ledger.budgets(), ledger.transactions(), month);

        assert_eq!(comparison.labels, vec!["Food"]);
        assert_eq!(comparison.budgeted, vec![200.0]);
        assert_eq!(comparison.actual, vec![185.5]);

        // 185.50 / 200 = 92.75%
        assert_eq!(comparison.statuses(), vec![BudgetStatus::ApproachingLimit]);
        assert_eq!(comparison.remaining(), vec![14.5]);
    }

    #[test]
    fn test_rows_follow_budget_insertion_order() {
        let month = Month::new(2024, 3);
        let mut ledger = Ledger::new();
        add_budget(&mut ledger, "Shopping", 10000, month);
        add_budget(&mut ledger, "Food", 20000, month);
        add_budget(&mut ledger, "Housing", 90000, month);

        let comparison = BudgetComparison::generate(ledger.budgets(), ledger.transactions(), month);

        assert_eq!(comparison.labels, vec!["Shopping", "Food", "Housing"]);
        assert_eq!(comparison.actual, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_other_months_excluded() {
        let mut ledger = Ledger::new();
        add_budget(&mut ledger, "Food", 20000, Month::new(2024, 3));
        add_expense(&mut ledger, date(2024, 2, 28), "Food", 5000);
        add_expense(&mut ledger, date(2024, 3, 5), "Food", 1000);

        let comparison = BudgetComparison::generate(
            ledger.budgets(),
            ledger.transactions(),
            Month::new(2024, 3),
        );

        // Only the March transaction counts toward actual
        assert_eq!(comparison.actual, vec![10.0]);
    }

    #[test]
    fn test_no_budgets_is_empty_not_an_error() {
        let mut ledger = Ledger::new();
        add_budget(&mut ledger, "Food", 20000, Month::new(2024, 2));

        let comparison = BudgetComparison::generate(
            ledger.budgets(),
            ledger.transactions(),
            Month::new(2024, 3),
        );

        assert!(comparison.is_empty());
        assert!(comparison.labels.is_empty());
        assert!(comparison.budgeted.is_empty());
        assert!(comparison.actual.is_empty());
    }
}
