use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Storage key [{key}] is not a valid file name")]
    InvalidKey {
        key: String
    },
    #[error("Could not read [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write [{}]: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error
    }
}
