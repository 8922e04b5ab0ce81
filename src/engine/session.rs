use tracing::{error, info, warn};

use crate::codec::{from_csv, from_snapshot, report, share_text, to_csv, to_snapshot};
use crate::engine::errors::SessionError;
use crate::engine::renderer::Renderer;
use crate::models::{Transaction, TransactionDraft};
use crate::storage::{PersistenceBackend, STORAGE_KEY};
use crate::store::TransactionStore;
use crate::types::TransactionIndex;
use crate::views::{category_breakdown, insight, totals};

/// Result of merging a CSV file into the session.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize
}

/// Drives one user's tracker: owns the store and keeps every view in step with it.
///
/// Each successful change is followed by exactly one render pass that pushes the table,
/// the totals, the category breakdown and the insight to the renderer, all computed from the
/// same list. Failed operations leave the store as it was and render nothing. A render pass
/// that fails after a change is logged and the change is kept.
pub struct Session<R: Renderer, P: PersistenceBackend> {
    store: TransactionStore,
    renderer: R,
    backend: P
}

impl<R: Renderer, P: PersistenceBackend> Session<R, P> {
    /// Starts a session from whatever was last saved, then renders once.
    ///
    /// A missing, unreadable or malformed save starts an empty list instead of failing.
    pub fn new(renderer: R, backend: P) -> Result<Self, SessionError> {
        let saved = match backend.load(STORAGE_KEY) {
            Ok(saved) => saved,
            Err(error) => {
                warn!("Starting without saved transactions: {error}");
                None
            }
        };

        let transactions = from_snapshot(saved.as_deref()).unwrap_or_default();
        info!("Session started with [{}] saved transactions", transactions.len());

        let mut session = Self {
            store: TransactionStore::with_transactions(transactions),
            renderer,
            backend
        };

        session.render()?;

        Ok(session)
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    pub fn add(&mut self, draft: TransactionDraft) -> Result<TransactionIndex, SessionError> {
        let index = self.store.add(draft)?;
        self.refresh();

        Ok(index)
    }

    pub fn begin_edit(&mut self, index: TransactionIndex) -> Result<(), SessionError> {
        self.store.begin_edit(index)?;
        self.refresh();

        Ok(())
    }

    pub fn commit_edit(&mut self, index: TransactionIndex, draft: TransactionDraft) -> Result<(), SessionError> {
        self.store.commit_edit(index, draft)?;
        self.refresh();

        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.store.cancel_edit();
        self.refresh();
    }

    pub fn delete(&mut self, index: TransactionIndex) -> Result<Transaction, SessionError> {
        let removed = self.store.delete(index)?;
        self.refresh();

        Ok(removed)
    }

    /// Appends every readable row of `text` to the current list.
    ///
    /// When no row is usable nothing changes and nothing is rendered.
    pub fn import_csv(&mut self, text: &str) -> Result<ImportSummary, SessionError> {
        let import = from_csv(text);
        let summary = ImportSummary {
            imported: import.transactions.len(),
            skipped: import.skipped
        };

        if import.transactions.is_empty() {
            warn!("CSV contains no data, [{}] lines skipped", import.skipped);
            return Ok(summary);
        }

        let mut merged = self.store.snapshot();
        merged.extend(import.transactions);
        self.store.replace_all(merged);

        info!("Imported [{}] transactions from CSV, skipped [{}]", summary.imported, summary.skipped);

        self.refresh();

        Ok(summary)
    }

    pub fn export_csv(&self) -> Result<String, SessionError> {
        Ok(to_csv(self.store.transactions())?)
    }

    /// Writes the current list over the previous save. Returns how many transactions were saved.
    pub fn save(&self) -> Result<usize, SessionError> {
        let snapshot = to_snapshot(self.store.transactions())?;
        self.backend.save(STORAGE_KEY, &snapshot)?;

        info!("Saved [{}] transactions", self.store.len());

        Ok(self.store.len())
    }

    /// Replaces the current list with the last save.
    ///
    /// # Errors
    /// Returns `SessionError::PersistenceMiss` when nothing usable was saved (absent,
    /// malformed or empty). The current list is kept in that case.
    pub fn restore(&mut self) -> Result<usize, SessionError> {
        let saved = self.backend.load(STORAGE_KEY)?;

        let transactions = match from_snapshot(saved.as_deref()) {
            Some(transactions) if !transactions.is_empty() => transactions,
            _ => return Err(SessionError::PersistenceMiss)
        };

        let count = transactions.len();
        self.store.replace_all(transactions);

        info!("Restored [{count}] transactions");

        self.refresh();

        Ok(count)
    }

    pub fn share_text(&self) -> String {
        share_text(self.store.transactions())
    }

    pub fn report(&self) -> String {
        report(self.store.transactions())
    }

    /// Pushes the current table and every derived view to the renderer.
    pub fn render(&mut self) -> Result<(), SessionError> {
        let transactions = self.store.transactions();

        self.renderer.render_table(transactions, self.store.cursor())?;
        self.renderer.render_totals(&totals(transactions))?;
        self.renderer.render_breakdown(&category_breakdown(transactions))?;
        self.renderer.render_insight(&insight(transactions))?;

        Ok(())
    }

    fn refresh(&mut self) {
        if let Err(render_error) = self.render() {
            error!("Change applied but the views could not be redrawn: {render_error}");
        }
    }
}
