//! Category catalog
//!
//! Static, process-wide lists of allowed category names per transaction
//! kind. Read-only after initialization; shared by validation, UI
//! population, and chart color assignment.

use super::transaction::TransactionKind;

/// Allowed income categories, in display order
pub const INCOME_CATEGORIES: [&str; 6] = [
    "Salary",
    "Bonus",
    "Freelance",
    "Investments",
    "Gifts",
    "Other Income",
];

/// Allowed expense categories, in display order
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Housing",
    "Utilities",
    "Food",
    "Transportation",
    "Healthcare",
    "Entertainment",
    "Shopping",
    "Education",
    "Personal",
    "Other Expenses",
];

/// The static catalog of allowed category names per transaction kind
pub struct CategoryCatalog;

impl CategoryCatalog {
    /// Get the income category list
    pub fn income() -> &'static [&'static str] {
        &INCOME_CATEGORIES
    }

    /// Get the expense category list
    pub fn expense() -> &'static [&'static str] {
        &EXPENSE_CATEGORIES
    }

    /// Get the category list for a transaction kind
    pub fn for_kind(kind: TransactionKind) -> &'static [&'static str] {
        match kind {
            TransactionKind::Income => Self::income(),
            TransactionKind::Expense => Self::expense(),
        }
    }

    /// Check whether a name is a valid category for the given kind
    pub fn contains(kind: TransactionKind, name: &str) -> bool {
        Self::for_kind(kind).contains(&name)
    }
}
