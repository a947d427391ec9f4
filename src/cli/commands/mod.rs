pub mod close;
pub mod config;
pub mod end;
pub mod export;
pub mod init;
pub mod list;
pub mod overtime;
pub mod prompt;
pub mod start;
pub mod status;

use crate::config::Config;
use crate::core::Ledger;
use crate::errors::{AppError, AppResult};
use crate::store::FileLedgerStore;
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured ledger file with the configured window sizes.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger<FileLedgerStore>> {
    let store = FileLedgerStore::open(cfg.ledger_path())?;
    Ok(Ledger::new(store)
        .with_lookback(cfg.lookback_window)
        .with_read_limit(cfg.read_limit))
}

/// `--day` option → calendar date (default today).
pub(crate) fn resolve_day(day: &Option<String>) -> AppResult<NaiveDate> {
    match day {
        None => Ok(date::today()),
        Some(label) => date::resolve_day(label, date::today())
            .ok_or_else(|| AppError::InvalidDate(label.clone())),
    }
}
