//! Ledger storage: an append-only sequence of opaque one-line records.

pub mod file;
pub mod memory;

pub use file::FileLedgerStore;
pub use memory::MemoryLedgerStore;

use crate::errors::{AppError, AppResult};

pub trait LedgerStore {
    /// Append one record at the end of the ledger.
    fn append(&mut self, record: &str) -> AppResult<()>;

    /// Every record, oldest first.
    fn read_all(&self) -> AppResult<Vec<String>>;

    /// The last `n` records in append order.
    fn read_last(&self, n: usize) -> AppResult<Vec<String>> {
        let mut all = self.read_all()?;
        let skip = all.len().saturating_sub(n);
        Ok(all.split_off(skip))
    }
}

/// Records are single non-empty lines.
pub(crate) fn check_record(record: &str) -> AppResult<()> {
    if record.trim().is_empty() || record.contains(['\n', '\r']) {
        return Err(AppError::InvalidRecordField {
            field: "record",
            value: record.to_string(),
        });
    }
    Ok(())
}
