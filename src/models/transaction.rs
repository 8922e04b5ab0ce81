use chrono::Local;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::{Category, TransactionKind, ValidationError};
use crate::types::Amount;

const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Today's local date in the display format stamped on new transactions, e.g. `10/19/2026`.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// A single accepted income or expense record.
///
/// Records can only be produced by validating a [`TransactionDraft`] or by restoring a
/// snapshot, which runs the same checks. Once accepted, the amount is always numeric and the
/// description is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    description: String,
    amount: Amount,
    /// Income or expense.
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: Category,
    /// Display-formatted creation date. Opaque to the application and never re-parsed.
    date: String
}

impl Transaction {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Unvalidated input for a transaction, as typed into the entry form or read from an import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    /// Raw amount text, parsed during validation.
    pub amount: String,
    pub kind: TransactionKind,
    pub category: Category,
    /// Explicit date. When absent, a new record gets today's date and an edit keeps the
    /// original one.
    pub date: Option<String>
}

impl TransactionDraft {
    pub fn new(description: impl Into<String>, amount: impl Into<String>, kind: TransactionKind, category: Category) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind,
            category,
            date: None
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Validates the draft, stamping today's date when none was given.
    pub fn validate(self) -> Result<Transaction, ValidationError> {
        self.validate_or_date(today)
    }

    /// Validates the draft, taking the date from `fallback_date` when none was given.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - The description is empty after trimming.
    /// - The amount is not a finite number.
    pub fn validate_or_date<F>(self, fallback_date: F) -> Result<Transaction, ValidationError>
    where
        F: FnOnce() -> String,
    {
        let description = self.description.trim();

        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let amount = Amount::from_str(&self.amount)
            .map_err(|error| ValidationError::invalid_amount(&self.amount, error))?;

        Ok(Transaction {
            description: description.to_string(),
            amount,
            kind: self.kind,
            category: self.category,
            date: self.date.unwrap_or_else(fallback_date)
        })
    }
}

/// Shape of a persisted record before validation. `desc` is the key used by older saves.
#[derive(Deserialize)]
struct RawTransaction {
    #[serde(alias = "desc")]
    description: String,
    amount: Amount,
    #[serde(rename = "type")]
    kind: TransactionKind,
    category: Category,
    date: String
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = ValidationError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let description = raw.description.trim();

        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Transaction {
            description: description.to_string(),
            amount: raw.amount,
            kind: raw.kind,
            category: raw.category,
            date: raw.date
        })
    }
}
