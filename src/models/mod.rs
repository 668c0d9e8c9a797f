//! Core data models for fintrack
//!
//! This module contains all the data structures that represent the tracking
//! domain: transactions, budgets, the category catalog, money, and months.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetDraft};
pub use category::{CategoryCatalog, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use ids::{BudgetId, TransactionId};
pub use money::Money;
pub use month::Month;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
