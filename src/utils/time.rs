//! Time utilities: duration strings and `--at` clock input.

use crate::errors::{AppError, AppResult};
use crate::models::ClockTime;
use regex::Regex;
use std::sync::LazyLock;

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<h>\d+)h)?\s*(?:(?P<m>\d+)m?)?$").expect("duration regex is valid")
});

/// Parse a work duration such as `8h`, `7h30m`, `7h 30m` or `450` (minutes).
pub fn parse_work_duration_to_minutes(s: &str) -> AppResult<i64> {
    let trimmed = s.trim().to_lowercase();
    let caps = DURATION
        .captures(&trimmed)
        .filter(|_| !trimmed.is_empty())
        .ok_or_else(|| AppError::InvalidTime(format!("Invalid duration: {s}")))?;

    let hours = caps
        .name("h")
        .map(|m| m.as_str().parse::<i64>())
        .transpose()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?
        .unwrap_or(0);
    let minutes = caps
        .name("m")
        .map(|m| m.as_str().parse::<i64>())
        .transpose()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?
        .unwrap_or(0);

    Ok(hours * 60 + minutes)
}

/// Parse `--at` input, defaulting to the current local time.
pub fn parse_optional_clock(input: Option<&String>) -> AppResult<ClockTime> {
    match input {
        Some(s) => ClockTime::parse(s),
        None => Ok(ClockTime::from(chrono::Local::now().time())),
    }
}
