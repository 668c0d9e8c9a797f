//! fintrack - Personal finance tracking core
//!
//! This library provides the data model, in-memory ledger, and derived-data
//! aggregation for a personal finance tracker: income/expense transactions,
//! monthly category budgets, and the monthly series, breakdowns, and
//! budget-vs-actual comparisons a UI renders as charts and tables.
//!
//! The UI itself is a separate collaborator: it mutates the [`store::Ledger`],
//! asks [`reports`] and [`query`] for fresh views, and renders the plain
//! structures they return. Nothing in this crate performs I/O.
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, months, the
//!   category catalog)
//! - `store`: The in-memory ledger owning the transaction and budget
//!   collections
//! - `query`: Transaction filtering and chronological ordering
//! - `reports`: Pure aggregation functions (monthly series, category
//!   breakdown, budget comparison, summary totals)
//! - `export`: CSV export of transaction views
//! - `sample`: Seedable demo data generation
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintrack::models::{Money, Month, TransactionDraft, TransactionKind};
//! use fintrack::reports::MonthlySummary;
//! use fintrack::store::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add_transaction(TransactionDraft::new(
//!     TransactionKind::Expense,
//!     Money::parse("45.50")?,
//!     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
//!     "Dinner out",
//!     "Food",
//! ))?;
//!
//! let summary = MonthlySummary::generate(ledger.transactions(), Month::new(2024, 3));
//! assert_eq!(summary.total_expense.cents(), 4550);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod reports;
pub mod sample;
pub mod store;

pub use error::{TrackerError, TrackerResult};
pub use store::Ledger;
