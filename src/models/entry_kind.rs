use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Start,
    End,
    Overtime,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::Start, EntryKind::End, EntryKind::Overtime];

    /// Convert enum → record string
    pub fn to_record_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "start",
            EntryKind::End => "end",
            EntryKind::Overtime => "overtime",
        }
    }

    /// Convert record string → enum. Records are always lowercase.
    pub fn from_record_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(EntryKind::Start),
            "end" => Some(EntryKind::End),
            "overtime" => Some(EntryKind::Overtime),
            _ => None,
        }
    }

    /// Helper: parse user input (case-insensitive, single-letter shortcuts).
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" | "s" | "in" => Some(EntryKind::Start),
            "end" | "e" | "out" => Some(EntryKind::End),
            "overtime" | "o" => Some(EntryKind::Overtime),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_record_str())
    }
}
