use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Labels offered by the interactive day menu.
pub const DAY_LABELS: [&str; 8] = [
    "Today",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Most recent `weekday` on or before `reference`.
pub fn previous_weekday(reference: NaiveDate, weekday: Weekday) -> NaiveDate {
    let from = reference.weekday().num_days_from_monday();
    let back = (7 + from - weekday.num_days_from_monday()) % 7;
    reference
        .checked_sub_days(Days::new(back as u64))
        .unwrap_or(reference)
}

/// Resolve a day selection: `today`, a weekday name, or `YYYY-MM-DD`.
pub fn resolve_day(label: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("today") || label.is_empty() {
        return Some(reference);
    }
    if label.eq_ignore_ascii_case("yesterday") {
        return reference.pred_opt();
    }
    if let Some(wd) = parse_weekday(label) {
        return Some(previous_weekday(reference, wd));
    }
    parse_date(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekday_resolves_to_most_recent_occurrence() {
        // 2026-10-21 is a Wednesday
        let wed = d(2026, 10, 21);
        assert_eq!(resolve_day("Monday", wed), Some(d(2026, 10, 19)));
        assert_eq!(resolve_day("wednesday", wed), Some(wed));
        assert_eq!(resolve_day("Thursday", wed), Some(d(2026, 10, 15)));
        assert_eq!(resolve_day("Sunday", wed), Some(d(2026, 10, 18)));
    }

    #[test]
    fn today_yesterday_and_iso_dates() {
        let ref_day = d(2026, 10, 21);
        assert_eq!(resolve_day("Today", ref_day), Some(ref_day));
        assert_eq!(resolve_day("yesterday", ref_day), Some(d(2026, 10, 20)));
        assert_eq!(resolve_day("2026-01-05", ref_day), Some(d(2026, 1, 5)));
        assert_eq!(resolve_day("someday", ref_day), None);
    }
}
