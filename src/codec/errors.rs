use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV error: could not flush output: {0}")]
    Flush(String),
    #[error("CSV error: output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error)
}
