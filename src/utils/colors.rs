//! ANSI color helper utilities for terminal output.

use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi regex is valid"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// Balance colour:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn colorize_balance(value: i64, text: &str) -> String {
    if value > 0 {
        Colour::Green.paint(text).to_string()
    } else if value < 0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Greys out zero-valued cells ("00h 00m", "--:--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00h 00m" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_kind(kind: crate::models::EntryKind) -> String {
    use crate::models::EntryKind;
    let label = kind.to_record_str();
    match kind {
        EntryKind::Start => Colour::Green.paint(label).to_string(),
        EntryKind::End => Colour::Red.paint(label).to_string(),
        EntryKind::Overtime => Colour::Purple.paint(label).to_string(),
    }
}
