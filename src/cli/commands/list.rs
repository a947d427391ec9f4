use crate::cli::commands::{open_ledger, resolve_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::presenter::{render_balance, render_entries};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, day } = cmd {
        let ledger = open_ledger(cfg)?;

        let entries = match day {
            Some(_) => ledger.entries_for_date(resolve_day(day)?)?,
            None => ledger.get_entries(*limit)?,
        };

        print!("{}", render_entries(&entries));
        println!("{}", render_balance(ledger.last_overtime_balance()?));
    }
    Ok(())
}
