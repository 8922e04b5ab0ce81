mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

/// Position of a transaction in the store. Positions shift down by one after a delete.
pub type TransactionIndex = usize;
