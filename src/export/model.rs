// src/export/model.rs

use crate::models::Entry;
use serde::Serialize;

/// Flat, human-oriented view of an entry for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub entry_time: i64,
    pub worked_time: i64,
    pub over_time: i64,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        let local = e.local_timestamp();
        Self {
            id: e.id.clone(),
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M").to_string(),
            kind: e.kind.to_record_str().to_string(),
            entry_time: e.entry_time,
            worked_time: e.worked_time,
            over_time: e.over_time,
        }
    }
}
