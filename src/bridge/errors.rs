use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Could not read [{}]: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("Could not write [{}]: {source}", path.display())]
    Write {
        path: PathBuf,
        source: io::Error
    },
    #[error("File name [{file_name}] must not contain a path")]
    InvalidFileName {
        file_name: String
    },
    #[error("Could not copy to clipboard: {0}")]
    Clipboard(#[from] io::Error)
}
