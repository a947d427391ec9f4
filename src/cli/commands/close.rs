use crate::cli::commands::{open_ledger, resolve_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::presenter::render_balance;

/// Apply the configured day-close policy to one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close { day } = cmd {
        let d = resolve_day(day)?;
        let policy = cfg.day_close()?;

        let mut ledger = open_ledger(cfg)?;
        match ledger.close_day(d, policy.as_ref())? {
            Some(entry) => success(format!(
                "Closed {d}: overtime adjusted by {:+} min.",
                entry.entry_time
            )),
            None => info(format!("Nothing to close for {d}.")),
        }

        println!("{}", render_balance(ledger.last_overtime_balance()?));
    }
    Ok(())
}
