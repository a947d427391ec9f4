use crate::cli::commands::open_ledger;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::presenter::render_balance;
use crate::utils::mins2readable;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ledger = open_ledger(cfg)?;

    println!("{}", render_balance(ledger.last_overtime_balance()?));

    if ledger.is_first_entry_today()? {
        println!("Nothing logged today yet.");
    } else {
        let worked: i64 = ledger
            .entries_for_date(crate::utils::date::today())?
            .iter()
            .map(|e| e.worked_time)
            .sum();
        println!("Worked today: {}", mins2readable(worked, false, false));
    }

    if let Some(last) = ledger.get_last_entry()? {
        println!(
            "Last entry: {} {} ({})",
            last.kind,
            last.local_timestamp().format("%Y-%m-%d %H:%M"),
            last.id
        );
    }

    Ok(())
}
