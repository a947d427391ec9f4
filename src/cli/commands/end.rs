use crate::cli::commands::{open_ledger, resolve_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::ui::messages::{success, warning};
use crate::utils::mins2readable;
use crate::utils::time::parse_optional_clock;

/// Log an `end` entry and report the minutes worked since the matching start.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::End { at, day } = cmd {
        let d = resolve_day(day)?;
        let clock = parse_optional_clock(at.as_ref())?;

        let mut ledger = open_ledger(cfg)?;
        let entry = ledger.insert_entry(EntryDraft::end(d, clock)?)?;

        if entry.worked_time == 0 {
            warning(format!(
                "No start found for {d} before {clock}: worked time recorded as 0."
            ));
        }
        success(format!(
            "Ended at {clock} on {d}: worked {} ({} min).",
            mins2readable(entry.worked_time, false, false),
            entry.worked_time
        ));
    }

    Ok(())
}
