use thiserror::Error;

use crate::models::ValidationError;
use crate::types::TransactionIndex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid transaction: {0}")]
    Validation(#[from] ValidationError),
    #[error("Transaction index [{index}] is out of range for [{len}] transactions")]
    IndexOutOfRange {
        index: TransactionIndex,
        len: usize
    }
}

impl StoreError {
    pub fn index_out_of_range(index: TransactionIndex, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
