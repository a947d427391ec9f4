//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, ignoring ANSI colour sequences.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = super::colors::strip_ansi(s).width();
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.unsigned_abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        // es: +02:25 oppure -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: +02h 25m oppure -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
