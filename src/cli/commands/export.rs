use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let ledger = open_ledger(cfg)?;
        let entries = ledger.get_all_entries()?;
        ExportLogic::export(&entries, *format, file, *force)?;
    }
    Ok(())
}
