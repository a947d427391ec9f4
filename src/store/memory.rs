use super::{LedgerStore, check_record};
use crate::errors::AppResult;

/// In-process ledger, used for isolated engine tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryLedgerStore {
    records: Vec<String>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw lines (blank lines are dropped, as the file store does).
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records: records
                .into_iter()
                .map(Into::into)
                .filter(|r: &String| !r.trim().is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn append(&mut self, record: &str) -> AppResult<()> {
        check_record(record)?;
        self.records.push(record.to_string());
        Ok(())
    }

    fn read_all(&self) -> AppResult<Vec<String>> {
        Ok(self.records.clone())
    }

    fn read_last(&self, n: usize) -> AppResult<Vec<String>> {
        let skip = self.records.len().saturating_sub(n);
        Ok(self.records[skip..].to_vec())
    }
}
