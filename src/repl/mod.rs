mod command;

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};

use crate::bridge::{ClipboardBridge, FileBridge};
use crate::codec::{CSV_EXPORT_FILE_NAME, REPORT_FILE_NAME};
use crate::engine::{Renderer, Session, SessionError};
use crate::storage::PersistenceBackend;

pub use command::{split_words, Command, CommandLine, EntryArgs};

enum Flow {
    Continue,
    Quit
}

/// Line-driven event loop: every input line is one user action, handled to completion
/// before the next line is read.
pub struct Repl<R: Renderer, P: PersistenceBackend, F: FileBridge, C: ClipboardBridge> {
    session: Session<R, P>,
    files: F,
    clipboard: C
}

impl<R: Renderer, P: PersistenceBackend, F: FileBridge, C: ClipboardBridge> Repl<R, P, F, C> {
    pub fn new(session: Session<R, P>, files: F, clipboard: C) -> Self {
        Self { session, files, clipboard }
    }

    pub fn session(&self) -> &Session<R, P> {
        &self.session
    }

    /// Reads commands until `quit` or the end of input. Failed commands are reported on
    /// `output` and never end the loop.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let words = split_words(&line);

            if words.is_empty() || words[0].starts_with('#') {
                continue;
            }

            let command_line = match CommandLine::try_parse_from(&words) {
                Ok(command_line) => command_line,
                Err(error) => {
                    write!(output, "{}", error.render())?;
                    continue;
                }
            };

            debug!("Handling {:?}", command_line.command);

            match self.handle(command_line.command, &mut output) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(error) => {
                    warn!("{error}");
                    writeln!(output, "Error: {error}")?;
                }
            }

            output.flush()?;
        }

        output.flush()?;

        Ok(())
    }

    fn handle<O: Write>(&mut self, command: Command, output: &mut O) -> Result<Flow> {
        match command {
            Command::Add(entry) => {
                let index = self.session.add(entry.into_draft())?;
                writeln!(output, "Added transaction {index}.")?;
            }
            Command::Edit { index } => {
                self.session.begin_edit(index)?;
            }
            Command::Commit { index, entry } => {
                self.session.commit_edit(index, entry.into_draft())?;
                writeln!(output, "Saved transaction {index}.")?;
            }
            Command::Cancel => {
                self.session.cancel_edit();
            }
            Command::Delete { index } => {
                let removed = self.session.delete(index)?;
                writeln!(output, "Deleted \"{}\".", removed.description())?;
            }
            Command::Import { path } => {
                let text = self.files.read_text(&path)?;
                let summary = self.session.import_csv(&text)?;

                if summary.imported == 0 {
                    writeln!(output, "CSV contains no data.")?;
                } else {
                    writeln!(output, "Imported {} transactions ({} lines skipped).", summary.imported, summary.skipped)?;
                }
            }
            Command::Export { file_name } => {
                let csv = self.session.export_csv()?;
                let path = self.files.offer_download(file_name.as_deref().unwrap_or(CSV_EXPORT_FILE_NAME), &csv)?;
                writeln!(output, "Exported to {}.", path.display())?;
            }
            Command::Save => {
                let count = self.session.save()?;
                writeln!(output, "Table saved ({count} transactions).")?;
            }
            Command::Restore => match self.session.restore() {
                Ok(count) => writeln!(output, "Restored {count} transactions.")?,
                Err(SessionError::PersistenceMiss) => writeln!(output, "No saved data found.")?,
                Err(error) => return Err(error.into())
            },
            Command::Share => {
                self.clipboard.copy(&self.session.share_text())?;
                writeln!(output, "Table copied to clipboard!")?;
            }
            Command::Report { file_name } => {
                let report = self.session.report();
                let path = self.files.offer_download(file_name.as_deref().unwrap_or(REPORT_FILE_NAME), &report)?;
                writeln!(output, "Summary written to {}.", path.display())?;
            }
            Command::Show => {
                self.session.render()?;
            }
            Command::Quit => return Ok(Flow::Quit)
        }

        Ok(Flow::Continue)
    }
}
