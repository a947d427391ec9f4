use crate::cli::commands::{open_ledger, resolve_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_optional_clock;

/// Log a `start` entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start { at, day, overtime } = cmd {
        let d = resolve_day(day)?;
        let clock = parse_optional_clock(at.as_ref())?;

        let mut ledger = open_ledger(cfg)?;
        let first_of_day = ledger.is_first_entry_on(d)?;

        let mut draft = EntryDraft::start(d, clock)?;
        if let Some(balance) = overtime {
            draft = draft.with_overtime(*balance);
        }

        let entry = ledger.insert_entry(draft)?;

        if first_of_day {
            info(format!("First entry of {d}."));
        }
        success(format!("Started at {clock} on {d} ({}).", entry.id));
    }

    Ok(())
}
