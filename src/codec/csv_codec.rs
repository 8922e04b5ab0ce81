use std::str::FromStr;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, warn};

use crate::codec::errors::CodecError;
use crate::models::{today, Category, Transaction, TransactionDraft, TransactionKind};
use crate::types::Amount;

pub const CSV_HEADER: [&str; 5] = ["Description", "Amount", "Type", "Category", "Date"];

const DEFAULT_AMOUNT: &str = "0";

/// Outcome of reading a CSV export. Lines that could not be turned into a transaction are
/// dropped and only counted.
#[derive(Debug, Default)]
pub struct CsvImport {
    pub transactions: Vec<Transaction>,
    pub skipped: usize
}

/// Writes the header followed by one row per transaction.
///
/// Text fields are quoted and the amount is not, e.g.
/// `"Lunch",12.5,"expense","Food","1/2/2025"`. Embedded quotes are doubled.
pub fn to_csv(transactions: &[Transaction]) -> Result<String, CodecError> {
    //NOTE: The header is written bare, the non-numeric quote style would otherwise quote it too
    let header = format!("{}\n", CSV_HEADER.join(","));

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(header.into_bytes());

    for transaction in transactions {
        let amount = transaction.amount().to_string();

        writer.write_record([
            transaction.description(),
            amount.as_str(),
            transaction.kind().as_str(),
            transaction.category().as_str(),
            transaction.date()
        ])?;
    }

    let bytes = writer.into_inner().map_err(|error| CodecError::Flush(error.error().to_string()))?;

    Ok(String::from_utf8(bytes)?)
}

/// Reads transactions from CSV text, skipping the header line.
///
/// Missing fields fall back to an amount of `0`, type `expense`, category `General` and
/// today's date. A line is skipped, never fatal, when it has more than five fields (an
/// unquoted comma), an unknown type or category, or an empty description.
pub fn from_csv(text: &str) -> CsvImport {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut import = CsvImport::default();

    for result in reader.records() {
        match result {
            Ok(record) => match parse_record(&record) {
                Ok(transaction) => import.transactions.push(transaction),
                Err(reason) => {
                    let line = record.position().map(|position| position.line()).unwrap_or_default();
                    warn!("Skipping CSV line [{line}]: {reason}");
                    import.skipped += 1;
                }
            },
            Err(error) => {
                warn!("Skipping unreadable CSV line: {error}");
                import.skipped += 1;
            }
        }
    }

    debug!("CSV import read [{}] transactions, skipped [{}]", import.transactions.len(), import.skipped);

    import
}

fn parse_record(record: &StringRecord) -> Result<Transaction, String> {
    if record.len() > CSV_HEADER.len() {
        return Err(format!("expected at most {} fields, found {}", CSV_HEADER.len(), record.len()));
    }

    let field = |position: usize| record.get(position).filter(|value| !value.is_empty());

    let description = field(0).unwrap_or_default();

    let amount = match field(1) {
        Some(raw) if Amount::from_str(raw).is_ok() => raw,
        Some(raw) => {
            debug!("CSV amount [{raw}] is not a number, using {DEFAULT_AMOUNT}");
            DEFAULT_AMOUNT
        }
        None => DEFAULT_AMOUNT
    };

    let kind = field(2)
        .map(TransactionKind::from_str)
        .transpose()
        .map_err(|error| error.to_string())?
        .unwrap_or(TransactionKind::Expense);

    let category = field(3)
        .map(Category::from_str)
        .transpose()
        .map_err(|error| error.to_string())?
        .unwrap_or_default();

    let mut draft = TransactionDraft::new(description, amount, kind, category);

    if let Some(date) = field(4) {
        draft = draft.with_date(date);
    }

    draft.validate_or_date(today).map_err(|error| error.to_string())
}
