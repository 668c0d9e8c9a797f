//! CSV export
//!
//! Writes a transaction view as `Type,Date,Description,Category,Amount`
//! rows. Every field is quoted and embedded quotes are doubled, so the
//! output round-trips through any standard CSV reader regardless of what
//! the descriptions contain.

use csv::{QuoteStyle, WriterBuilder};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Serialize transactions to CSV, one row per transaction in the order given
///
/// The caller supplies an already filtered and sorted view. `Type` is
/// capitalized, `Date` is ISO (`2024-03-15`), and `Amount` is signed:
/// positive for income, negative for expense, always with two decimals.
pub fn transactions_to_csv(transactions: &[Transaction]) -> TrackerResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(["Type", "Date", "Description", "Category", "Amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for txn in transactions {
        writer
            .write_record([
                txn.kind.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.category.clone(),
                format!("{:.2}", txn.signed_amount().to_f64()),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TrackerError::Export(e.to_string()))
}
