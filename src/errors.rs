//! Unified application error type.
//! All modules (store, codec, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ledger records
    // ---------------------------
    #[error("Malformed ledger record: {0}")]
    MalformedRecord(String),

    #[error("Invalid record field '{field}': {value:?} contains a reserved character")]
    InvalidRecordField { field: &'static str, value: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    // ---------------------------
    // Accounting errors
    // ---------------------------
    #[error("Invalid overtime value: {0}")]
    InvalidOvertimeValue(String),

    #[error(
        "End at {end} on {date} closes a shift started the previous day at {start}; \
         log an end before midnight and a new start after it"
    )]
    CrossesMidnight {
        date: String,
        start: String,
        end: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
