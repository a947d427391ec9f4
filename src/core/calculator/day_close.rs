//! Day-close policies: how a finished day's entries turn into an overtime delta.

use crate::models::{Entry, EntryKind};
use serde::{Deserialize, Serialize};

pub trait DayClosePolicy {
    /// Signed minutes to add to the overtime balance for one day's entries.
    fn on_day_close(&self, entries: &[Entry]) -> i64;
}

/// Balance only moves through manual adjustments.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDayClose;

impl DayClosePolicy for NoDayClose {
    fn on_day_close(&self, _entries: &[Entry]) -> i64 {
        0
    }
}

/// Worked time beyond (or short of) a fixed daily target.
#[derive(Debug, Clone, Copy)]
pub struct DailyTarget {
    pub target_minutes: i64,
}

impl DayClosePolicy for DailyTarget {
    fn on_day_close(&self, entries: &[Entry]) -> i64 {
        let ends: Vec<&Entry> = entries.iter().filter(|e| e.kind == EntryKind::End).collect();
        if ends.is_empty() {
            return 0;
        }

        let worked: i64 = ends.iter().map(|e| e.worked_time).sum();
        worked - self.target_minutes
    }
}

/// Policy selector as written in the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClosePolicyKind {
    #[default]
    None,
    DailyTarget,
}

impl DayClosePolicyKind {
    pub fn build(&self, target_minutes: i64) -> Box<dyn DayClosePolicy> {
        match self {
            DayClosePolicyKind::None => Box::new(NoDayClose),
            DayClosePolicyKind::DailyTarget => Box::new(DailyTarget { target_minutes }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(kind: EntryKind, worked_time: i64) -> Entry {
        Entry {
            id: "x".into(),
            timestamp: Utc::now(),
            entry_time: 0,
            kind,
            worked_time,
            over_time: 0,
        }
    }

    #[test]
    fn daily_target_sums_end_entries() {
        let policy = DailyTarget { target_minutes: 480 };
        let day = vec![
            entry(EntryKind::Start, 0),
            entry(EntryKind::End, 165),
            entry(EntryKind::Start, 0),
            entry(EntryKind::End, 345),
        ];
        assert_eq!(policy.on_day_close(&day), 30);
    }

    #[test]
    fn daily_target_ignores_days_without_ends() {
        let policy = DailyTarget { target_minutes: 480 };
        assert_eq!(policy.on_day_close(&[entry(EntryKind::Start, 0)]), 0);
        assert_eq!(policy.on_day_close(&[]), 0);
    }

    #[test]
    fn no_day_close_never_moves_balance() {
        assert_eq!(NoDayClose.on_day_close(&[entry(EntryKind::End, 600)]), 0);
    }

    #[test]
    fn kind_builds_matching_policy() {
        let day = vec![entry(EntryKind::End, 500)];
        assert_eq!(DayClosePolicyKind::DailyTarget.build(480).on_day_close(&day), 20);
        assert_eq!(DayClosePolicyKind::None.build(480).on_day_close(&day), 0);
    }
}
