use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeLedger
#[derive(Parser)]
#[command(
    name = "rtimeledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-time ledger: log start/end events and keep a running overtime balance",
    long_about = None
)]
pub struct Cli {
    /// Override ledger file path (useful for tests or a second ledger)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty ledger
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log the start of work
    Start {
        #[arg(long = "at", help = "Clock time (HHMM or HH:MM), default now")]
        at: Option<String>,

        #[arg(
            long = "day",
            help = "Day: today, yesterday, a weekday name or YYYY-MM-DD (default today)"
        )]
        day: Option<String>,

        #[arg(
            long = "overtime",
            allow_hyphen_values = true,
            help = "Set the overtime balance (minutes) instead of carrying it forward"
        )]
        overtime: Option<i64>,
    },

    /// Log the end of work and compute the minutes worked
    End {
        #[arg(long = "at", help = "Clock time (HHMM or HH:MM), default now")]
        at: Option<String>,

        #[arg(
            long = "day",
            help = "Day: today, yesterday, a weekday name or YYYY-MM-DD (default today)"
        )]
        day: Option<String>,
    },

    /// Add minutes to the overtime balance
    Add {
        /// Minutes to add
        minutes: u32,
    },

    /// Subtract minutes from the overtime balance
    Sub {
        /// Minutes to subtract
        minutes: u32,
    },

    /// List the most recent entries
    List {
        #[arg(long, short, help = "Number of most recently logged entries to read")]
        limit: Option<usize>,

        #[arg(long, short, help = "Only entries of this day (today, weekday or YYYY-MM-DD)")]
        day: Option<String>,
    },

    /// Show the current overtime balance
    Status,

    /// Close a day with the configured day-close policy
    Close {
        #[arg(long, help = "Day to close (default today)")]
        day: Option<String>,
    },

    /// Export the whole ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive menu (new entry, add, subtract, refresh, close, quit)
    Prompt,
}
