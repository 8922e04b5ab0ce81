use tracing::debug;

use crate::models::{Transaction, TransactionDraft};
use crate::store::errors::StoreError;
use crate::types::TransactionIndex;

/// Which transaction, if any, is open for in-place editing.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum EditCursor {
    #[default]
    Idle,
    Editing(TransactionIndex)
}

impl EditCursor {
    pub fn index(&self) -> Option<TransactionIndex> {
        match self {
            EditCursor::Idle => None,
            EditCursor::Editing(index) => Some(*index)
        }
    }

    pub fn is_editing(&self, index: TransactionIndex) -> bool {
        *self == EditCursor::Editing(index)
    }
}

/// Owns the ordered transaction list and the edit cursor.
///
/// Transactions are addressed by position only. Every operation either succeeds completely or
/// leaves both the list and the cursor untouched, with one exception: a delete at or before
/// the edited position clears the cursor so it can never point at a shifted record.
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    cursor: EditCursor
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `transactions`, with no edit in progress.
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            cursor: EditCursor::Idle
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    pub fn get(&self, index: TransactionIndex) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    /// Read-only view of the current list.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Point-in-time copy of the list. Changing the copy never affects the store.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Validates `draft` and appends it to the end of the list.
    ///
    /// # Errors
    /// Returns `StoreError::Validation` if the description is empty or the amount is not a
    /// finite number. The store is unchanged in that case.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<TransactionIndex, StoreError> {
        let transaction = draft.validate()?;
        self.transactions.push(transaction);

        let index = self.transactions.len() - 1;
        debug!("Transaction [{index}] added");

        Ok(index)
    }

    /// Opens the transaction at `index` for editing, replacing any edit already in progress.
    pub fn begin_edit(&mut self, index: TransactionIndex) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.cursor = EditCursor::Editing(index);

        debug!("Editing transaction [{index}]");

        Ok(())
    }

    /// Replaces the whole record at `index` and closes the edit.
    ///
    /// The original date is kept unless `draft` carries an explicit one.
    ///
    /// # Errors
    /// Returns `StoreError` if:
    /// - `index` no longer exists.
    /// - The draft fails validation.
    pub fn commit_edit(&mut self, index: TransactionIndex, draft: TransactionDraft) -> Result<(), StoreError> {
        let original = self.transactions.get(index)
            .ok_or_else(|| StoreError::index_out_of_range(index, self.transactions.len()))?;

        let original_date = original.date().to_string();
        let transaction = draft.validate_or_date(|| original_date)?;

        self.transactions[index] = transaction;
        self.cursor = EditCursor::Idle;

        debug!("Transaction [{index}] updated");

        Ok(())
    }

    /// Closes any edit in progress. Calling it while idle does nothing.
    pub fn cancel_edit(&mut self) {
        self.cursor = EditCursor::Idle;
    }

    /// Removes the transaction at `index`, shifting later transactions down by one.
    pub fn delete(&mut self, index: TransactionIndex) -> Result<Transaction, StoreError> {
        self.check_index(index)?;
        let removed = self.transactions.remove(index);

        if let EditCursor::Editing(editing) = self.cursor {
            if editing >= index {
                debug!("Edit of transaction [{editing}] invalidated by delete");
                self.cursor = EditCursor::Idle;
            }
        }

        debug!("Transaction [{index}] deleted");

        Ok(removed)
    }

    /// Swaps in an entirely new list and closes any edit in progress.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        debug!("Replacing [{}] transactions with [{}]", self.transactions.len(), transactions.len());

        self.transactions = transactions;
        self.cursor = EditCursor::Idle;
    }

    fn check_index(&self, index: TransactionIndex) -> Result<(), StoreError> {
        if index >= self.transactions.len() {
            return Err(StoreError::index_out_of_range(index, self.transactions.len()));
        }

        Ok(())
    }
}
