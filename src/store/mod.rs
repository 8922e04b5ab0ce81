mod errors;
mod transaction_store;

pub use errors::StoreError;
pub use transaction_store::{EditCursor, TransactionStore};
