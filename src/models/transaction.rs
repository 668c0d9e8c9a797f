//! Transaction model
//!
//! Represents a single income or expense entry with a date, an amount, and
//! a category drawn from the static catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Lowercase token used in filters and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Amount (always positive; the kind carries the sign)
    pub amount: Money,

    /// Transaction date (no time component)
    pub date: NaiveDate,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Category name from the catalog for this kind
    pub category: String,
}

impl Transaction {
    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with its sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// The user-supplied fields of a transaction, before an id is assigned
///
/// Drafts are validated by the ledger on insert and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Income or expense
    pub kind: TransactionKind,

    /// Amount (must be positive)
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Category name from the catalog for this kind
    pub category: String,
}

impl TransactionDraft {
    /// Create a draft with all fields
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount,
            date,
            description: description.into(),
            category: category.into(),
        }
    }

    /// Materialize this draft into a stored transaction with the given id
    pub(crate) fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            kind: self.kind,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category: self.category,
        }
    }
}
