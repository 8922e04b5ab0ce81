use std::io;
use std::io::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::store::EditCursor;
use crate::views::{Breakdown, Insight, Totals};

const DESCRIPTION_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 13;
const CHART_WIDTH: usize = 20;
const CHART_BAR: char = '#';

/// Receives the derived state after every change. Renderers only display what they are given
/// and are never read back.
pub trait Renderer {
    fn render_table(&mut self, transactions: &[Transaction], cursor: EditCursor) -> io::Result<()>;
    fn render_totals(&mut self, totals: &Totals) -> io::Result<()>;
    fn render_breakdown(&mut self, breakdown: &Breakdown) -> io::Result<()>;
    fn render_insight(&mut self, insight: &Insight) -> io::Result<()>;
}

/// Plain-text renderer: a transaction table, the summary line, a bar chart and the insight.
pub struct TerminalRenderer<W: Write> {
    output: W
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_table(&mut self, transactions: &[Transaction], cursor: EditCursor) -> io::Result<()> {
        if transactions.is_empty() {
            return writeln!(self.output, "No transactions yet.");
        }

        writeln!(
            self.output,
            "  {:>3}  {:<DESCRIPTION_WIDTH$}  {:>12}  {:<7}  {:<CATEGORY_WIDTH$}  Date",
            "#", "Description", "Amount", "Type", "Category"
        )?;

        for (index, transaction) in transactions.iter().enumerate() {
            let marker = if cursor.is_editing(index) { '>' } else { ' ' };

            writeln!(
                self.output,
                "{marker} {:>3}  {:<DESCRIPTION_WIDTH$}  {:>12}  {:<7}  {:<CATEGORY_WIDTH$}  {}",
                index,
                truncate(transaction.description(), DESCRIPTION_WIDTH),
                transaction.amount().currency(),
                transaction.kind().as_str(),
                transaction.category().as_str(),
                transaction.date()
            )?;
        }

        if let Some(index) = cursor.index() {
            writeln!(self.output, "Editing transaction {index}. Use commit {index} ... or cancel.")?;
        }

        Ok(())
    }

    fn render_totals(&mut self, totals: &Totals) -> io::Result<()> {
        writeln!(
            self.output,
            "Income: {}  Expenses: {}  Balance: {}",
            totals.income.currency(),
            totals.expense.currency(),
            totals.balance.currency()
        )
    }

    fn render_breakdown(&mut self, breakdown: &Breakdown) -> io::Result<()> {
        if breakdown.is_empty() {
            return writeln!(self.output, "No expenses to chart.");
        }

        let largest = breakdown.iter()
            .map(|(_, amount)| amount.value())
            .max()
            .unwrap_or_default();

        for (category, amount) in breakdown.iter() {
            let bar = CHART_BAR.to_string().repeat(bar_length(amount.value(), largest));
            writeln!(self.output, "{:<CATEGORY_WIDTH$} {:<CHART_WIDTH$} {}", category.as_str(), bar, amount.currency())?;
        }

        Ok(())
    }

    fn render_insight(&mut self, insight: &Insight) -> io::Result<()> {
        writeln!(self.output, "Insight: {insight}")?;
        self.output.flush()
    }
}

fn bar_length(value: Decimal, largest: Decimal) -> usize {
    if value <= Decimal::ZERO || largest <= Decimal::ZERO {
        return 0;
    }

    value.checked_mul(Decimal::from(CHART_WIDTH))
        .and_then(|scaled| scaled.checked_div(largest))
        .and_then(|length| length.round().to_usize())
        .unwrap_or(0)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('~');
    truncated
}
