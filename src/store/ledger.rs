//! The in-memory ledger
//!
//! Owns the transaction and budget collections. Insertion order is
//! preserved: it is the tie-break order for equal-date sorting and the
//! display order for budget comparisons. All reads hand out snapshots or
//! borrowed slices; the aggregation layer never holds references back into
//! the store.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    Budget, BudgetDraft, BudgetId, CategoryCatalog, Transaction, TransactionDraft, TransactionId,
    TransactionKind,
};

/// Outcome of a budget submission: either a new record was created, or an
/// existing (category, month) budget was overwritten in place
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetUpsert {
    /// A new budget was appended
    Created(Budget),
    /// An existing budget for the same (category, month) was updated,
    /// keeping its id
    Merged(Budget),
}

impl BudgetUpsert {
    /// The stored budget record, regardless of outcome
    pub fn budget(&self) -> &Budget {
        match self {
            Self::Created(b) | Self::Merged(b) => b,
        }
    }

    /// Check if this submission merged into an existing budget
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged(_))
    }
}

/// The authoritative in-memory collections of transactions and budgets
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All transactions, in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All budgets, in insertion order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Look up a budget by id
    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// Validate and append a new transaction, assigning a fresh id
    ///
    /// Returns a clone of the stored record. On validation failure the
    /// store is left unchanged.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> TrackerResult<Transaction> {
        validate_transaction(&draft)?;
        let txn = draft.into_transaction(TransactionId::new());
        self.transactions.push(txn.clone());
        Ok(txn)
    }

    /// Replace every field except the id of an existing transaction
    ///
    /// Returns the updated record. Fails with a not-found error if no
    /// transaction has the given id; a validation failure leaves the stored
    /// record untouched.
    pub fn update_transaction(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> TrackerResult<Transaction> {
        validate_transaction(&draft)?;
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        *slot = draft.into_transaction(id);
        Ok(slot.clone())
    }

    /// Delete a transaction
    ///
    /// Fails with a not-found error when the id is absent (rather than
    /// silently doing nothing).
    pub fn remove_transaction(&mut self, id: TransactionId) -> TrackerResult<()> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        self.transactions.remove(index);
        Ok(())
    }

    /// Create a budget, or overwrite the existing one for the same
    /// (category, month) pair
    ///
    /// A duplicate submission is not an error: the existing record keeps its
    /// id, its amount is replaced, and the `Merged` outcome reports what
    /// happened so the caller can tell the user.
    pub fn add_or_update_budget(&mut self, draft: BudgetDraft) -> TrackerResult<BudgetUpsert> {
        validate_budget(&draft)?;

        if let Some(existing) = self
            .budgets
            .iter_mut()
            .find(|b| b.covers(&draft.category, draft.month))
        {
            existing.amount = draft.amount;
            return Ok(BudgetUpsert::Merged(existing.clone()));
        }

        let budget = draft.into_budget(BudgetId::new());
        self.budgets.push(budget.clone());
        Ok(BudgetUpsert::Created(budget))
    }
}

fn validate_transaction(draft: &TransactionDraft) -> TrackerResult<()> {
    if !draft.amount.is_positive() {
        return Err(TrackerError::validation("Amount must be a positive number"));
    }
    if !CategoryCatalog::contains(draft.kind, &draft.category) {
        return Err(TrackerError::validation(format!(
            "Unknown {} category: {}",
            draft.kind.as_str(),
            draft.category
        )));
    }
    Ok(())
}

fn validate_budget(draft: &BudgetDraft) -> TrackerResult<()> {
    if !draft.amount.is_positive() {
        return Err(TrackerError::validation("Amount must be a positive number"));
    }
    if !CategoryCatalog::contains(TransactionKind::Expense, &draft.category) {
        return Err(TrackerError::validation(format!(
            "Unknown expense category: {}",
            draft.category
        )));
    }
    Ok(())
}
