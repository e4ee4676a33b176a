//! Evaluation history display
//!
//! Renders recorded evaluations as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::AuditEntry;
use crate::models::money::format_amount;

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Suggestions")]
    suggestions: usize,
}

impl HistoryRow {
    fn from_entry(entry: &AuditEntry, symbol: &str) -> Self {
        Self {
            id: entry.short_id(),
            when: entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            source: entry.source.to_string(),
            income: format_amount(entry.result.total_income, symbol),
            expenses: format_amount(entry.result.total_expenses, symbol),
            net: format_amount(entry.result.net_cash_flow, symbol),
            goal: entry.result.goal_funding_status.to_string(),
            suggestions: entry.result.optimization_areas.len(),
        }
    }
}

/// Format recorded evaluations as a table, oldest first
pub fn format_history(entries: &[AuditEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No evaluations recorded.".to_string();
    }

    let rows: Vec<HistoryRow> = entries
        .iter()
        .map(|e| HistoryRow::from_entry(e, symbol))
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
