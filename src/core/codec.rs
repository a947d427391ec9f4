//! Record codec: one `Entry` ⇔ one `;`-separated ledger line.
//!
//! Schema v1, fixed field order:
//! ```text
//! id;timestampUTC;entryTime;workedTime;kind;overTime;
//! ```
//! The trailing delimiter is written on encode and optional on decode.

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryKind};
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;

pub const SCHEMA_VERSION: u32 = 1;
pub const RECORD_FIELDS: usize = 6;
pub const DELIMITER: char = ';';

fn check_field(field: &'static str, value: &str) -> AppResult<()> {
    if value.contains([DELIMITER, '\n', '\r']) {
        return Err(AppError::InvalidRecordField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

pub fn encode(entry: &Entry) -> AppResult<String> {
    check_field("id", &entry.id)?;

    Ok(format!(
        "{};{};{};{};{};{};",
        entry.id,
        entry.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        entry.entry_time,
        entry.worked_time,
        entry.kind.to_record_str(),
        entry.over_time,
    ))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_int(name: &str, raw: &str, line: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::MalformedRecord(format!("{name} '{raw}' is not an integer in: {line}"))
    })
}

pub fn decode(line: &str) -> AppResult<Entry> {
    let body = line.trim_end_matches(['\r', '\n']);
    let body = body.strip_suffix(DELIMITER).unwrap_or(body);
    let parts: Vec<&str> = body.split(DELIMITER).collect();

    if parts.len() != RECORD_FIELDS {
        return Err(AppError::MalformedRecord(format!(
            "expected {RECORD_FIELDS} fields, found {}: {line}",
            parts.len()
        )));
    }

    let timestamp = parse_timestamp(parts[1]).ok_or_else(|| {
        AppError::MalformedRecord(format!("bad timestamp '{}' in: {line}", parts[1]))
    })?;
    let entry_time = parse_int("entryTime", parts[2], line)?;
    let worked_time = parse_int("workedTime", parts[3], line)?;
    let kind = EntryKind::from_record_str(parts[4]).ok_or_else(|| {
        AppError::MalformedRecord(format!("unknown kind '{}' in: {line}", parts[4]))
    })?;
    let over_time = parts[5].trim().parse::<i64>().unwrap_or(0);

    Ok(Entry {
        id: parts[0].to_string(),
        timestamp,
        entry_time,
        kind,
        worked_time,
        over_time,
    })
}

/// Decode for bulk reads: a corrupt line is logged and skipped.
pub fn decode_lenient(line: &str) -> Option<Entry> {
    match decode(line) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!(error = %e, "dropping ledger record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Entry {
        Entry {
            id: "4f1c2d6e-8a47-4b8e-9c1e-2f3a4b5c6d7e".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 11, 30, 0).unwrap(),
            entry_time: 1330,
            kind: EntryKind::End,
            worked_time: 390,
            over_time: -25,
        }
    }

    #[test]
    fn encodes_fixed_field_order_with_trailing_delimiter() {
        assert_eq!(
            encode(&sample()).unwrap(),
            "4f1c2d6e-8a47-4b8e-9c1e-2f3a4b5c6d7e;2026-10-19T11:30:00Z;1330;390;end;-25;"
        );
    }

    #[test]
    fn decode_inverts_encode() {
        let entry = sample();
        assert_eq!(decode(&encode(&entry).unwrap()).unwrap(), entry);

        let overtime = Entry {
            kind: EntryKind::Overtime,
            entry_time: -90,
            worked_time: 0,
            ..sample()
        };
        assert_eq!(decode(&encode(&overtime).unwrap()).unwrap(), overtime);
    }

    #[test]
    fn trailing_delimiter_is_optional() {
        let line = "abc;2026-10-19T11:30:00Z;700;0;start;15";
        let entry = decode(line).unwrap();
        assert_eq!(entry.kind, EntryKind::Start);
        assert_eq!(entry.over_time, 15);
    }

    #[test]
    fn accepts_legacy_utc_string_timestamps() {
        let entry = decode("abc;Mon, 19 Oct 2026 11:30:00 GMT;1330;0;start;0;").unwrap();
        assert_eq!(entry.timestamp, Utc.with_ymd_and_hms(2026, 10, 19, 11, 30, 0).unwrap());
    }

    #[test]
    fn non_numeric_overtime_falls_back_to_zero() {
        let entry = decode("abc;2026-10-19T11:30:00Z;1330;0;start;NaN;").unwrap();
        assert_eq!(entry.over_time, 0);
    }

    #[test]
    fn rejects_wrong_field_count_kind_and_numbers() {
        for line in [
            "",
            "abc;2026-10-19T11:30:00Z;1330;0;start;",
            "abc;2026-10-19T11:30:00Z;1330;0;start;0;extra;",
            "abc;2026-10-19T11:30:00Z;1330;0;pause;0;",
            "abc;2026-10-19T11:30:00Z;13:30;0;start;0;",
            "abc;2026-10-19T11:30:00Z;1330;1.5;end;0;",
            "abc;yesterday;1330;0;start;0;",
        ] {
            assert!(
                matches!(decode(line), Err(AppError::MalformedRecord(_))),
                "expected malformed: {line:?}"
            );
            assert!(decode_lenient(line).is_none());
        }
    }

    #[test]
    fn refuses_to_encode_delimiter_in_id() {
        let entry = Entry {
            id: "a;b".into(),
            ..sample()
        };
        assert!(matches!(
            encode(&entry),
            Err(AppError::InvalidRecordField { field: "id", .. })
        ));
    }
}
