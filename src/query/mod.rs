//! Transaction filtering and ordering
//!
//! Produces filtered, chronologically ordered views over a transaction
//! slice without mutating it.

pub mod filter;

pub use filter::{recent_transactions, select_transactions, TransactionFilter, RECENT_LIMIT};
