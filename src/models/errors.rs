use thiserror::Error;

use crate::types::AmountError;

/// A user-correctable problem with submitted transaction input. The store is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Amount [{input}] is not a valid number: {source}")]
    InvalidAmount {
        input: String,
        source: AmountError
    },
    #[error("Unknown transaction type [{input}], expected income or expense")]
    UnknownKind {
        input: String
    },
    #[error("Unknown category [{input}]")]
    UnknownCategory {
        input: String
    }
}

impl ValidationError {
    pub fn invalid_amount(input: &str, source: AmountError) -> Self {
        Self::InvalidAmount { input: input.to_string(), source }
    }

    pub fn unknown_kind(input: &str) -> Self {
        Self::UnknownKind { input: input.to_string() }
    }

    pub fn unknown_category(input: &str) -> Self {
        Self::UnknownCategory { input: input.to_string() }
    }
}
