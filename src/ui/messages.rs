//! User-facing status lines (icon + colour), printed alongside command output.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line<T: fmt::Display>(colour: Colour, icon: &str, msg: T) -> String {
    format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Blue, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Green, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Colour::Yellow, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Colour::Red, ICON_ERR, msg));
}
