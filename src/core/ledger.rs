//! Entry accounting engine.
//!
//! Turns drafts into stored entries with their derived `worked_time` and
//! running `over_time`, and reads them back. Day-relative questions only
//! look at the last `lookback` appended records: the ledger grows without
//! bound and "did I clock in today?" never needs more than recent history.

use crate::core::calculator::day_close::DayClosePolicy;
use crate::core::calculator::worked;
use crate::core::codec;
use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, Entry, EntryDraft, EntryKind};
use crate::store::LedgerStore;
use crate::utils::date;
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

pub const DEFAULT_LOOKBACK_WINDOW: usize = 10;
pub const DEFAULT_READ_LIMIT: usize = 10;

pub struct Ledger<S: LedgerStore> {
    store: S,
    lookback: usize,
    read_limit: usize,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lookback: DEFAULT_LOOKBACK_WINDOW,
            read_limit: DEFAULT_READ_LIMIT,
        }
    }

    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback.max(1);
        self
    }

    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = read_limit.max(1);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Last `n` decodable entries in append order.
    fn recent_entries(&self, n: usize) -> AppResult<Vec<Entry>> {
        Ok(self
            .store
            .read_last(n)?
            .iter()
            .filter_map(|line| codec::decode_lenient(line))
            .collect())
    }

    fn sorted(mut entries: Vec<Entry>) -> Vec<Entry> {
        // stable: equal timestamps keep append order
        entries.sort_by_key(|e| e.timestamp);
        entries
    }

    /// Up to `limit` most recently appended entries, sorted by timestamp.
    pub fn get_entries(&self, limit: Option<usize>) -> AppResult<Vec<Entry>> {
        let n = limit.unwrap_or(self.read_limit);
        Ok(Self::sorted(self.recent_entries(n)?))
    }

    /// Whole ledger, sorted by timestamp.
    pub fn get_all_entries(&self) -> AppResult<Vec<Entry>> {
        let entries = self
            .store
            .read_all()?
            .iter()
            .filter_map(|line| codec::decode_lenient(line))
            .collect();
        Ok(Self::sorted(entries))
    }

    /// The most recently appended entry, regardless of its timestamp.
    pub fn get_last_entry(&self) -> AppResult<Option<Entry>> {
        Ok(self
            .store
            .read_last(1)?
            .first()
            .and_then(|line| codec::decode_lenient(line)))
    }

    pub fn last_overtime_balance(&self) -> AppResult<i64> {
        Ok(self.get_last_entry()?.map(|e| e.over_time).unwrap_or(0))
    }

    pub fn is_first_entry_today(&self) -> AppResult<bool> {
        self.is_first_entry_on(date::today())
    }

    /// True iff nothing in the lookback window falls on `day`.
    pub fn is_first_entry_on(&self, day: NaiveDate) -> AppResult<bool> {
        Ok(!self
            .recent_entries(self.lookback)?
            .iter()
            .any(|e| e.local_date() == day))
    }

    /// Entries in the lookback window on the local calendar `day`, by timestamp.
    pub fn entries_for_date(&self, day: NaiveDate) -> AppResult<Vec<Entry>> {
        let entries = self
            .recent_entries(self.lookback)?
            .into_iter()
            .filter(|e| e.local_date() == day)
            .collect();
        Ok(Self::sorted(entries))
    }

    pub fn calculate_worked_time(
        &self,
        end_date: NaiveDate,
        end_clock: ClockTime,
    ) -> AppResult<i64> {
        let window = self.recent_entries(self.lookback)?;
        worked::worked_minutes(&window, end_date, end_clock)
    }

    /// Compute derived fields for `draft` and append it.
    pub fn insert_entry(&mut self, draft: EntryDraft) -> AppResult<Entry> {
        let last_balance = self.last_overtime_balance()?;

        let (worked_time, over_time) = match draft.kind {
            EntryKind::Start => (0, draft.overtime_override.unwrap_or(last_balance)),
            EntryKind::End => {
                let worked = match ClockTime::from_hhmm(draft.entry_time) {
                    Ok(end_clock) => {
                        let end_date = draft.timestamp.with_timezone(&Local).date_naive();
                        self.calculate_worked_time(end_date, end_clock)?
                    }
                    Err(e) => {
                        warn!(error = %e, "end entry without a valid clock time, worked 0");
                        0
                    }
                };
                (worked, last_balance)
            }
            EntryKind::Overtime => {
                let balance = last_balance.checked_add(draft.entry_time).unwrap_or_else(|| {
                    let e = AppError::InvalidOvertimeValue(format!(
                        "{last_balance} + {} overflows",
                        draft.entry_time
                    ));
                    warn!(error = %e, "balance normalized to 0");
                    0
                });
                (0, balance)
            }
        };

        let entry = Entry {
            id: draft.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string()),
            timestamp: draft.stored_timestamp(),
            entry_time: draft.entry_time,
            kind: draft.kind,
            worked_time,
            over_time,
        };

        self.store.append(&codec::encode(&entry)?)?;
        info!(id = %entry.id, kind = %entry.kind, worked_time, over_time, "entry appended");

        Ok(entry)
    }

    /// Apply `policy` to `day` and append the resulting overtime delta.
    ///
    /// Returns `None` when the day has no entries or the delta is zero.
    pub fn close_day(
        &mut self,
        day: NaiveDate,
        policy: &dyn DayClosePolicy,
    ) -> AppResult<Option<Entry>> {
        let entries = self.entries_for_date(day)?;
        let Some(latest) = entries.last().map(|e| e.timestamp) else {
            return Ok(None);
        };

        let delta = policy.on_day_close(&entries);
        if delta == 0 {
            return Ok(None);
        }

        self.insert_entry(EntryDraft::overtime(latest, delta)).map(Some)
    }
}
