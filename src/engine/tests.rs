use super::{ImportSummary, Renderer, Session, SessionError, TerminalRenderer};

use std::io;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::codec::to_csv;
use crate::models::{Category, Transaction, TransactionDraft, TransactionKind};
use crate::storage::{MemoryBackend, PersistenceBackend, STORAGE_KEY};
use crate::store::{EditCursor, StoreError};
use crate::types::Amount;
use crate::views::{category_breakdown, insight, totals, Breakdown, Insight, Totals};

/// Everything one render pass pushed out.
#[derive(Debug, Default)]
struct Frame {
    transactions: Vec<Transaction>,
    cursor: EditCursor,
    totals: Option<Totals>,
    breakdown: Option<Breakdown>,
    insight: Option<Insight>
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Frame>
}

impl RecordingRenderer {
    fn last(&self) -> Result<&Frame> {
        self.frames.last().ok_or_else(|| anyhow!("Nothing was rendered"))
    }

    fn current(&mut self) -> io::Result<&mut Frame> {
        self.frames.last_mut().ok_or_else(|| io::Error::other("render pass did not start with the table"))
    }
}

impl Renderer for RecordingRenderer {
    fn render_table(&mut self, transactions: &[Transaction], cursor: EditCursor) -> io::Result<()> {
        self.frames.push(Frame {
            transactions: transactions.to_vec(),
            cursor,
            ..Frame::default()
        });
        Ok(())
    }

    fn render_totals(&mut self, totals: &Totals) -> io::Result<()> {
        self.current()?.totals = Some(*totals);
        Ok(())
    }

    fn render_breakdown(&mut self, breakdown: &Breakdown) -> io::Result<()> {
        self.current()?.breakdown = Some(breakdown.clone());
        Ok(())
    }

    fn render_insight(&mut self, insight: &Insight) -> io::Result<()> {
        self.current()?.insight = Some(*insight);
        Ok(())
    }
}

fn create_draft(description: &str, amount: &str, kind: TransactionKind, category: Category) -> TransactionDraft {
    TransactionDraft::new(description, amount, kind, category).with_date("1/1/2025")
}

fn create_session() -> Result<Session<RecordingRenderer, MemoryBackend>> {
    Ok(Session::new(RecordingRenderer::default(), MemoryBackend::new())?)
}

fn assert_frame_is_consistent(frame: &Frame) {
    assert_eq!(frame.totals, Some(totals(&frame.transactions)));
    assert_eq!(frame.breakdown, Some(category_breakdown(&frame.transactions)));
    assert_eq!(frame.insight, Some(insight(&frame.transactions)));
}

#[test]
fn test_new_session_renders_empty_state_once() -> Result<()> {
    let session = create_session()?;
    let frame = session.renderer().last()?;

    assert_eq!(session.renderer().frames.len(), 1);
    assert!(frame.transactions.is_empty());
    assert_eq!(frame.cursor, EditCursor::Idle);
    assert_eq!(frame.insight, Some(Insight::NoData));
    assert_frame_is_consistent(frame);

    Ok(())
}

#[test]
fn test_new_session_loads_saved_snapshot() -> Result<()> {
    let backend = MemoryBackend::new();
    backend.save(STORAGE_KEY, r#"[{"desc":"Rent","amount":900,"type":"expense","category":"Bills","date":"2/1/2025"}]"#)?;

    let session = Session::new(RecordingRenderer::default(), backend)?;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.renderer().last()?.transactions.len(), 1);

    Ok(())
}

#[test]
fn test_new_session_ignores_malformed_snapshot() -> Result<()> {
    let backend = MemoryBackend::new();
    backend.save(STORAGE_KEY, "{broken")?;

    let session = Session::new(RecordingRenderer::default(), backend)?;

    assert!(session.store().is_empty());

    Ok(())
}

#[test]
fn test_every_mutation_renders_one_consistent_frame() -> Result<()> {
    let mut session = create_session()?;

    session.add(create_draft("Salary", "1000", TransactionKind::Income, Category::General))?;
    session.add(create_draft("Pizza", "80", TransactionKind::Expense, Category::Food))?;
    session.add(create_draft("Power", "20", TransactionKind::Expense, Category::Bills))?;
    session.begin_edit(2)?;
    session.commit_edit(2, create_draft("Power", "25", TransactionKind::Expense, Category::Bills))?;
    session.begin_edit(0)?;
    session.cancel_edit();
    session.delete(0)?;

    let frames = &session.renderer().frames;

    assert_eq!(frames.len(), 9);

    for frame in frames {
        assert_frame_is_consistent(frame);
    }

    let last = session.renderer().last()?;

    assert_eq!(last.transactions.len(), 2);
    assert_eq!(last.totals.map(|t| t.expense), Some(Amount::from_str("105")?));
    assert!(matches!(last.insight, Some(Insight::TopCategory { category: Category::Food, .. })));

    Ok(())
}

#[test]
fn test_begin_edit_frame_carries_cursor() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("a", "1", TransactionKind::Expense, Category::Food))?;
    session.begin_edit(0)?;

    assert_eq!(session.renderer().last()?.cursor, EditCursor::Editing(0));

    Ok(())
}

#[test]
fn test_failed_operations_do_not_render() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("a", "1", TransactionKind::Expense, Category::Food))?;
    let rendered = session.renderer().frames.len();

    assert!(matches!(
        session.add(create_draft("", "1", TransactionKind::Expense, Category::Food)),
        Err(SessionError::Store(StoreError::Validation(_)))
    ));
    assert!(matches!(session.delete(4), Err(SessionError::Store(StoreError::IndexOutOfRange { .. }))));
    assert!(session.begin_edit(1).is_err());

    assert_eq!(session.renderer().frames.len(), rendered);
    assert_eq!(session.store().len(), 1);

    Ok(())
}

#[test]
fn test_delete_before_cursor_renders_idle_cursor() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("a", "1", TransactionKind::Expense, Category::Food))?;
    session.add(create_draft("b", "2", TransactionKind::Expense, Category::Food))?;
    session.begin_edit(1)?;

    session.delete(0)?;

    assert_eq!(session.store().cursor(), EditCursor::Idle);
    assert_eq!(session.renderer().last()?.cursor, EditCursor::Idle);

    Ok(())
}

#[test]
fn test_import_csv_appends_rows_and_clears_cursor() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("Existing", "5", TransactionKind::Expense, Category::General))?;
    session.begin_edit(0)?;

    let text = "Description,Amount,Type,Category,Date\n\"Bus\",3,\"expense\",\"Transport\",\"1/2/2025\"\nbad,row,with,too,many,fields\n";
    let summary = session.import_csv(text)?;

    assert_eq!(summary, ImportSummary { imported: 1, skipped: 1 });
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.store().get(1).map(|t| t.description()), Some("Bus"));
    assert_eq!(session.store().cursor(), EditCursor::Idle);
    assert_frame_is_consistent(session.renderer().last()?);

    Ok(())
}

#[test]
fn test_import_csv_without_rows_changes_nothing() -> Result<()> {
    let mut session = create_session()?;
    let rendered = session.renderer().frames.len();

    let summary = session.import_csv("Description,Amount,Type,Category,Date\n")?;

    assert_eq!(summary, ImportSummary::default());
    assert_eq!(session.renderer().frames.len(), rendered);

    Ok(())
}

#[test]
fn test_export_csv_matches_codec_output() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("Lunch", "12.5", TransactionKind::Expense, Category::Food))?;

    assert_eq!(session.export_csv()?, to_csv(session.store().transactions())?);

    Ok(())
}

#[test]
fn test_save_then_restore_brings_back_saved_list() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("Keep", "10", TransactionKind::Income, Category::General))?;

    assert_eq!(session.save()?, 1);

    session.add(create_draft("Drop", "3", TransactionKind::Expense, Category::Food))?;
    session.begin_edit(1)?;

    assert_eq!(session.restore()?, 1);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().cursor(), EditCursor::Idle);
    assert_eq!(session.renderer().last()?.transactions.len(), 1);

    Ok(())
}

#[test]
fn test_save_overwrites_previous_snapshot() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("One", "1", TransactionKind::Income, Category::General))?;
    session.save()?;
    session.delete(0)?;
    session.save()?;

    assert_eq!(session.backend().load(STORAGE_KEY)?.as_deref(), Some("[]"));

    Ok(())
}

#[test]
fn test_restore_without_saved_data_is_a_miss() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("Current", "1", TransactionKind::Income, Category::General))?;

    assert!(matches!(session.restore(), Err(SessionError::PersistenceMiss)));

    session.backend().save(STORAGE_KEY, "[]")?;

    assert!(matches!(session.restore(), Err(SessionError::PersistenceMiss)));

    session.backend().save(STORAGE_KEY, "not json")?;

    assert!(matches!(session.restore(), Err(SessionError::PersistenceMiss)));
    assert_eq!(session.store().len(), 1);

    Ok(())
}

#[test]
fn test_share_text_and_report_reflect_store() -> Result<()> {
    let mut session = create_session()?;
    session.add(create_draft("Lunch", "12.5", TransactionKind::Expense, Category::Food))?;

    assert_eq!(session.share_text(), "Lunch\t$12.5\texpense\tFood\t1/1/2025");
    assert!(session.report().ends_with("1. Lunch - $12.5 - expense - Food - 1/1/2025\n"));

    Ok(())
}

#[test]
fn test_terminal_renderer_prints_every_view() -> Result<()> {
    let mut renderer = TerminalRenderer::new(Vec::new());
    let transactions = vec![
        create_draft("Pizza", "80", TransactionKind::Expense, Category::Food).validate()?,
        create_draft("Power", "20", TransactionKind::Expense, Category::Bills).validate()?,
    ];

    renderer.render_table(&transactions, EditCursor::Editing(1))?;
    renderer.render_totals(&totals(&transactions))?;
    renderer.render_breakdown(&category_breakdown(&transactions))?;
    renderer.render_insight(&insight(&transactions))?;

    let output = String::from_utf8(renderer.into_inner())?;

    assert!(output.contains("Pizza"));
    assert!(output.contains("$80.00"));
    assert!(output.contains(">   1  Power"));
    assert!(output.contains("Income: $0.00  Expenses: $100.00  Balance: $-100.00"));
    assert!(output.contains("####################"));
    assert!(output.contains(&format!("{:<13} {:<20} $20.00", "Bills", "#####")));
    assert!(output.contains("Insight: Your highest spending is in \"Food\" at 80.0%"));

    Ok(())
}

#[test]
fn test_terminal_renderer_handles_empty_state() -> Result<()> {
    let mut renderer = TerminalRenderer::new(Vec::new());

    renderer.render_table(&[], EditCursor::Idle)?;
    renderer.render_breakdown(&category_breakdown(&[]))?;
    renderer.render_insight(&Insight::NoData)?;

    let output = String::from_utf8(renderer.into_inner())?;

    assert!(output.contains("No transactions yet."));
    assert!(output.contains("No expenses to chart."));
    assert!(output.contains("Add data to generate insights."));

    Ok(())
}

/// Renders the first pass, then fails every pass after it.
#[derive(Default)]
struct BrokenRenderer {
    passes: usize
}

impl Renderer for BrokenRenderer {
    fn render_table(&mut self, _transactions: &[Transaction], _cursor: EditCursor) -> io::Result<()> {
        self.passes += 1;

        if self.passes > 1 {
            return Err(io::Error::other("terminal closed"));
        }

        Ok(())
    }

    fn render_totals(&mut self, _totals: &Totals) -> io::Result<()> {
        Ok(())
    }

    fn render_breakdown(&mut self, _breakdown: &Breakdown) -> io::Result<()> {
        Ok(())
    }

    fn render_insight(&mut self, _insight: &Insight) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_render_failure_after_change_keeps_change() -> Result<()> {
    let mut session = Session::new(BrokenRenderer::default(), MemoryBackend::new())?;

    let index = session.add(create_draft("Pizza", "80", TransactionKind::Expense, Category::Food))?;
    session.begin_edit(index)?;
    session.commit_edit(index, create_draft("Pizza", "90", TransactionKind::Expense, Category::Food))?;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().transactions()[0].amount(), Amount::from_str("90")?);
    assert!(session.render().is_err());

    let removed = session.delete(0)?;

    assert_eq!(removed.description(), "Pizza");
    assert!(session.store().is_empty());

    Ok(())
}
