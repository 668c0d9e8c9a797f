//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the tracker core using
//! thiserror for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Validation errors for user-supplied fields (amounts, dates, categories)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<crate::models::money::MoneyParseError> for TrackerError {
    fn from(err: crate::models::money::MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::month::MonthParseError> for TrackerError {
    fn from(err: crate::models::month::MonthParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;
