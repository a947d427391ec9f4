//! 24-hour clock values stored in records as `HHMM` integers (1330 = 13:30).

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static CLOCK_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<h>\d{1,2}):?(?P<m>\d{2})$").expect("clock regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Decode an `HHMM` integer as stored in `entryTime`.
    pub fn from_hhmm(value: i64) -> AppResult<Self> {
        if !(0..=2359).contains(&value) {
            return Err(AppError::InvalidTime(value.to_string()));
        }
        Self::new((value / 100) as u32, (value % 100) as u32)
    }

    /// Parse user input: `1330`, `930`, `13:30` or `9:30`.
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        let caps = CLOCK_INPUT
            .captures(trimmed)
            .ok_or_else(|| AppError::InvalidTime(trimmed.to_string()))?;

        let hour = caps["h"]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidTime(trimmed.to_string()))?;
        let minute = caps["m"]
            .parse::<u32>()
            .map_err(|_| AppError::InvalidTime(trimmed.to_string()))?;

        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_hhmm(&self) -> i64 {
        (self.hour * 100 + self.minute) as i64
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
