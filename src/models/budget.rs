//! Budget model
//!
//! A monthly spending ceiling for a single expense category. At most one
//! budget exists per (category, month) pair; the ledger merges duplicates.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;
use super::month::Month;

/// A monthly budget ceiling for an expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Expense category this budget applies to
    pub category: String,

    /// Monthly ceiling (always positive)
    pub amount: Money,

    /// The calendar month this budget covers
    pub month: Month,
}

impl Budget {
    /// Check if this budget covers the given (category, month) pair
    pub fn covers(&self, category: &str, month: Month) -> bool {
        self.category == category && self.month == month
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.category, self.amount)
    }
}

/// The user-supplied fields of a budget, before an id is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetDraft {
    /// Expense category this budget applies to
    pub category: String,

    /// Monthly ceiling (must be positive)
    pub amount: Money,

    /// The calendar month this budget covers
    pub month: Month,
}

impl BudgetDraft {
    /// Create a draft with all fields
    pub fn new(category: impl Into<String>, amount: Money, month: Month) -> Self {
        Self {
            category: category.into(),
            amount,
            month,
        }
    }

    /// Materialize this draft into a stored budget with the given id
    pub(crate) fn into_budget(self, id: BudgetId) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            month: self.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draft() -> BudgetDraft {
        BudgetDraft::new("Food", Money::from_units(200), Month::new(2024, 3))
    }

    #[test]
    fn test_covers() {
        let budget = test_draft().into_budget(BudgetId::new());
        assert!(budget.covers("Food", Month::new(2024, 3)));
        assert!(!budget.covers("Food", Month::new(2024, 4)));
        assert!(!budget.covers("Housing", Month::new(2024, 3)));
    }

    #[test]
    fn test_display() {
        let budget = test_draft().into_budget(BudgetId::new());
        assert_eq!(format!("{}", budget), "2024-03 Food: $200.00");
    }

    #[test]
    fn test_serialization() {
        let budget = test_draft().into_budget(BudgetId::new());
        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
