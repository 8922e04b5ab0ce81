use std::io;

use thiserror::Error;

use crate::codec::CodecError;
use crate::storage::PersistenceError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error("No saved data found")]
    PersistenceMiss,
    #[error("Render error: {0}")]
    Render(#[from] io::Error)
}
