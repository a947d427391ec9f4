use super::{clock::ClockTime, entry_kind::EntryKind};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::Serialize;

/// One logged event with its derived fields, exactly as stored in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: String,
    pub timestamp: DateTime<Utc>, // ⇔ UTC, whole seconds
    pub entry_time: i64,          // ⇔ HHMM for start/end, minute delta for overtime
    pub kind: EntryKind,
    pub worked_time: i64, // ⇔ minutes, end entries only
    pub over_time: i64,   // ⇔ running balance including this entry
}

impl Entry {
    /// Calendar date of the entry in the local timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }

    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// Clock time for start/end entries. `None` for overtime entries or
    /// when the stored value is not a valid `HHMM`.
    pub fn clock(&self) -> Option<ClockTime> {
        if self.kind == EntryKind::Overtime {
            return None;
        }
        ClockTime::from_hhmm(self.entry_time).ok()
    }

    pub fn date_str(&self) -> String {
        self.local_date().format("%Y-%m-%d").to_string()
    }
}

/// Caller-side input to `Ledger::insert_entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub timestamp: DateTime<Utc>,
    pub entry_time: i64,
    pub id: Option<String>,
    /// Explicit balance for a `start` entry. Ignored for other kinds.
    pub overtime_override: Option<i64>,
}

impl EntryDraft {
    /// A start/end event at `clock` on the local calendar day `date`.
    pub fn clock_event(kind: EntryKind, date: NaiveDate, clock: ClockTime) -> AppResult<Self> {
        let naive = date.and_time(clock.to_naive_time());
        let local = Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                AppError::InvalidDate(format!("{date} {clock} does not exist locally"))
            })?;

        Ok(Self {
            kind,
            timestamp: local.with_timezone(&Utc),
            entry_time: clock.to_hhmm(),
            id: None,
            overtime_override: None,
        })
    }

    pub fn start(date: NaiveDate, clock: ClockTime) -> AppResult<Self> {
        Self::clock_event(EntryKind::Start, date, clock)
    }

    pub fn end(date: NaiveDate, clock: ClockTime) -> AppResult<Self> {
        Self::clock_event(EntryKind::End, date, clock)
    }

    /// A manual adjustment of `delta` minutes (negative to subtract).
    pub fn overtime(timestamp: DateTime<Utc>, delta: i64) -> Self {
        Self {
            kind: EntryKind::Overtime,
            timestamp,
            entry_time: delta,
            id: None,
            overtime_override: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_overtime(mut self, balance: i64) -> Self {
        self.overtime_override = Some(balance);
        self
    }

    /// Timestamp as it will be stored (sub-second precision dropped).
    pub fn stored_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.trunc_subsecs(0)
    }
}
