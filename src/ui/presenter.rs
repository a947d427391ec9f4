//! Terminal rendering of ledger entries and balances.

use crate::models::{Entry, EntryKind};
use crate::utils::colors::{colorize_balance, colorize_kind, colorize_optional};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

/// Entry table: date, clock/delta, worked, balance, kind, id.
pub fn render_entries(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Time", 8),
        Column::new("Worked", 8),
        Column::new("Overtime", 9),
        Column::new("Kind", 8),
        Column::new("Id", 36),
    ]);

    for e in entries {
        let time = match e.kind {
            EntryKind::Overtime => mins2readable(e.entry_time, true, true),
            _ => e
                .clock()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "--:--".to_string()),
        };
        let balance = mins2readable(e.over_time, true, false);

        table.add_row(vec![
            e.date_str(),
            colorize_optional(&time),
            colorize_optional(&mins2readable(e.worked_time, false, false)),
            colorize_balance(e.over_time, &balance),
            colorize_kind(e.kind),
            e.id.clone(),
        ]);
    }

    table.render()
}

pub fn render_balance(balance: i64) -> String {
    format!(
        "The current overtime is {}",
        colorize_balance(balance, &mins2readable(balance, true, false))
    )
}
