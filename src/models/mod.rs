pub mod clock;
pub mod entry;
pub mod entry_kind;

pub use clock::ClockTime;
pub use entry::{Entry, EntryDraft};
pub use entry_kind::EntryKind;
