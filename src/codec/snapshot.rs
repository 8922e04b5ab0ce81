use tracing::{debug, warn};

use crate::codec::errors::CodecError;
use crate::models::Transaction;

/// Serializes the full list as a JSON array of `{description, amount, type, category, date}`.
pub fn to_snapshot(transactions: &[Transaction]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(transactions)?)
}

/// Restores a list written by [`to_snapshot`].
///
/// Returns `None` ("no data") when the text is absent, is not JSON, is not an array, or holds
/// any record that fails validation. There is no partial restore.
pub fn from_snapshot(text: Option<&str>) -> Option<Vec<Transaction>> {
    let Some(text) = text else {
        debug!("No snapshot to restore");
        return None
    };

    match serde_json::from_str::<Vec<Transaction>>(text) {
        Ok(transactions) => Some(transactions),
        Err(error) => {
            warn!("Discarding malformed snapshot: {error}");
            None
        }
    }
}
