//! rTimeLedger library root.
//! Exposes the accounting engine, storage, CLI parser and the high-level
//! run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Start { .. } => cli::commands::start::handle(&cli.command, cfg),
        Commands::End { .. } => cli::commands::end::handle(&cli.command, cfg),
        Commands::Add { .. } | Commands::Sub { .. } => {
            cli::commands::overtime::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Close { .. } => cli::commands::close::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Prompt => cli::commands::prompt::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply ledger override from the command line
    if let Some(custom) = &cli.ledger {
        cfg.ledger = custom.clone();
    }

    logging::init(&cfg.log_level);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
