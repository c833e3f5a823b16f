//! The non-chart surfaces and the sink they are published to.

use api::convert;
use api::models::Stats;
use api::models::Transaction;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

use crate::view_state::ViewState;

/// Receives rendered, display-ready surfaces.
///
/// The UI implements this with signals; tests record what they are given.
pub trait SurfaceSink {
    fn view_changed(&self, view: ViewState);
    fn show_stats(&self, stats: StatsView);
    fn show_transactions(&self, rows: Vec<TransactionRow>);
}

/// The summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: String,
    pub top_category: String,
    pub transaction_count: u64,
}

impl StatsView {
    pub fn render(stats: &Stats, view: ViewState) -> Self {
        Self {
            total: convert::format(stats.total_balance, view.currency),
            top_category: stats.highest_category.clone(),
            transaction_count: stats.transaction_count,
        }
    }
}

/// One line of the recent transactions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub category: String,
    pub note: String,
    pub date: String,
    pub amount: String,
}

impl TransactionRow {
    pub fn render(tx: &Transaction, view: ViewState) -> Self {
        let note = match tx.note.as_deref().map(str::trim) {
            Some(note) if !note.is_empty() => note.to_string(),
            _ => "-".to_string(),
        };
        Self {
            category: tx.category.clone(),
            note,
            date: display_date(&tx.date),
            amount: format!("-{}", convert::format(tx.amount, view.currency)),
        }
    }
}

/// Builds the table from raw rows, converting each amount on its own.
pub fn transaction_rows(recent: &[Transaction], view: ViewState) -> Vec<TransactionRow> {
    recent
        .iter()
        .map(|tx| TransactionRow::render(tx, view))
        .collect()
}

/// Shows backend timestamps as `M/D/YYYY`; anything unparseable is shown as sent.
fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
