use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::FileLedgerStore;

/// Handle the `init` command. `cfg` already carries any `--ledger` override.
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty ledger file
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = Config::config_file();

    println!("⚙️  Initializing rTimeLedger…");

    if !cli.test {
        cfg.save_to(&config_path)?;
        println!("📄 Config file : {}", config_path.display());
    }

    let store = FileLedgerStore::open(cfg.ledger_path())?;
    println!("🗒️  Ledger      : {}", store.path().display());

    println!("🎉 rTimeLedger initialization completed!");
    Ok(())
}
