use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::EntryDraft;
use crate::ui::messages::success;
use crate::ui::presenter::render_balance;
use chrono::Utc;

/// Manual overtime adjustment (`add` / `sub`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let delta = match cmd {
        Commands::Add { minutes } => i64::from(*minutes),
        Commands::Sub { minutes } => -i64::from(*minutes),
        _ => return Ok(()),
    };

    let mut ledger = open_ledger(cfg)?;
    ledger.insert_entry(EntryDraft::overtime(Utc::now(), delta))?;

    success(format!("Overtime adjusted by {delta:+} min."));
    println!("{}", render_balance(ledger.last_overtime_balance()?));

    Ok(())
}
