use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{Category, TransactionDraft, TransactionKind};
use crate::types::TransactionIndex;

/// One line of user input.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, name = "finsight", disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a transaction, e.g. `add expense Food 12.50 Lunch with Sam`
    Add(EntryArgs),
    /// Open the transaction at INDEX for editing
    Edit {
        index: TransactionIndex
    },
    /// Replace the transaction at INDEX, keeping its date unless --date is given
    Commit {
        index: TransactionIndex,
        #[command(flatten)]
        entry: EntryArgs
    },
    /// Stop editing without changes
    Cancel,
    /// Delete the transaction at INDEX
    Delete {
        index: TransactionIndex
    },
    /// Append the rows of a CSV export
    Import {
        path: PathBuf
    },
    /// Write the table as CSV into the export directory
    Export {
        file_name: Option<String>
    },
    /// Save the table, replacing the previous save
    Save,
    /// Replace the table with the last save
    Restore,
    /// Show the table as tab-separated text for copying
    Share,
    /// Write a printable budget summary into the export directory
    Report {
        file_name: Option<String>
    },
    /// Show the table, totals, chart and insight again
    Show,
    /// End the session
    #[command(alias = "exit")]
    Quit
}

#[derive(Debug, Args)]
pub struct EntryArgs {
    /// income or expense
    pub kind: TransactionKind,
    /// General, Food, Transport, Bills or Entertainment
    pub category: Category,
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,
    /// Date to record instead of today (or instead of the original date when committing)
    #[arg(long)]
    pub date: Option<String>
}

impl EntryArgs {
    pub fn into_draft(self) -> TransactionDraft {
        let draft = TransactionDraft::new(self.description.join(" "), self.amount, self.kind, self.category);

        match self.date {
            Some(date) => draft.with_date(date),
            None => draft
        }
    }
}

/// Splits a line into words on whitespace. Double quotes group words and are removed.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if has_word {
        words.push(current);
    }

    words
}
