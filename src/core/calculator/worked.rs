//! Worked-time calculation: pair an `end` with the latest unmatched same-day `start`.

use crate::errors::{AppError, AppResult};
use crate::models::{ClockTime, Entry, EntryKind};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Minutes from `start` to `end` on the same day, borrowing an hour when the
/// start minute is past the end minute.
pub fn minutes_between(start: ClockTime, end: ClockTime) -> i64 {
    let (sh, sm) = (start.hour() as i64, start.minute() as i64);
    let (eh, em) = (end.hour() as i64, end.minute() as i64);

    let (diff_hours, diff_minutes) = if sm > em {
        (eh - sh - 1, 60 - sm + em)
    } else {
        (eh - sh, em - sm)
    };

    60 * diff_hours + diff_minutes
}

/// Longest gap from an open evening `start` to a morning `end` that is
/// still read as one shift across midnight.
pub const MAX_OVERNIGHT_SHIFT_MINUTES: i64 = 16 * 60;

fn minutes_of_day(clock: ClockTime) -> i64 {
    clock.hour() as i64 * 60 + clock.minute() as i64
}

/// Remove and return the most recently appended open start whose clock is
/// not after `end_clock`.
fn take_latest_open<'a>(
    open: &mut Vec<(&'a Entry, ClockTime)>,
    end_clock: ClockTime,
) -> Option<(&'a Entry, ClockTime)> {
    let pos = open.iter().rposition(|(_, clock)| *clock <= end_clock)?;
    Some(open.remove(pos))
}

/// Starts on `end_date` not yet consumed by an `end`, in append order.
///
/// Replays the window: every same-day `end` consumes the start it paired
/// with when it was inserted.
pub fn unmatched_starts(window: &[Entry], end_date: NaiveDate) -> Vec<(&Entry, ClockTime)> {
    let mut open = Vec::new();

    let same_day = window
        .iter()
        .filter(|e| e.kind != EntryKind::Overtime && e.local_date() == end_date);

    for e in same_day {
        let clock = match ClockTime::from_hhmm(e.entry_time) {
            Ok(clock) => clock,
            Err(err) => {
                warn!(id = %e.id, error = %err, "skipping entry with invalid clock time");
                continue;
            }
        };

        if e.kind == EntryKind::Start {
            open.push((e, clock));
        } else {
            take_latest_open(&mut open, clock);
        }
    }

    open
}

/// Most recent unmatched `start` on `end_date` whose clock is not after
/// `end_clock`.
pub fn find_matching_start(
    window: &[Entry],
    end_date: NaiveDate,
    end_clock: ClockTime,
) -> Option<(&Entry, ClockTime)> {
    let mut open = unmatched_starts(window, end_date);
    take_latest_open(&mut open, end_clock)
}

/// A shift left open on the day before `end_date` that `end_clock` would
/// close within [`MAX_OVERNIGHT_SHIFT_MINUTES`].
pub fn open_shift_from_previous_day(
    window: &[Entry],
    end_date: NaiveDate,
    end_clock: ClockTime,
) -> Option<(&Entry, ClockTime)> {
    let previous = end_date.pred_opt()?;
    let last = window.iter().rev().find(|e| e.local_date() == previous)?;

    if last.kind != EntryKind::Start {
        return None;
    }

    let clock = last.clock()?;
    if clock <= end_clock {
        return None;
    }

    let gap = 24 * 60 - minutes_of_day(clock) + minutes_of_day(end_clock);
    if gap > MAX_OVERNIGHT_SHIFT_MINUTES {
        warn!(
            start_id = %last.id,
            %clock,
            %end_clock,
            gap,
            "start left open the previous day is too far back to pair"
        );
        return None;
    }

    Some((last, clock))
}

/// Worked minutes for an `end` at `end_clock` on `end_date`.
///
/// No qualifying start means zero minutes. A start left open the previous
/// evening is refused with `CrossesMidnight`.
pub fn worked_minutes(
    window: &[Entry],
    end_date: NaiveDate,
    end_clock: ClockTime,
) -> AppResult<i64> {
    if let Some((start, start_clock)) = find_matching_start(window, end_date, end_clock) {
        let minutes = minutes_between(start_clock, end_clock);
        debug!(start_id = %start.id, %start_clock, %end_clock, minutes, "paired end with start");
        return Ok(minutes);
    }

    if let Some((_, start_clock)) = open_shift_from_previous_day(window, end_date, end_clock) {
        return Err(AppError::CrossesMidnight {
            date: end_date.to_string(),
            start: start_clock.to_string(),
            end: end_clock.to_string(),
        });
    }

    debug!(%end_date, %end_clock, "no unmatched start found in lookback window");
    Ok(0)
}
