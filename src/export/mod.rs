//! Export module for fintrack
//!
//! Serializes transaction views to a delimited text format the UI
//! collaborator can offer as a file download.

pub mod csv;

pub use csv::transactions_to_csv;
