pub mod calculator;
pub mod codec;
pub mod ledger;

pub use calculator::day_close::{DailyTarget, DayClosePolicy, DayClosePolicyKind, NoDayClose};
pub use ledger::{DEFAULT_LOOKBACK_WINDOW, DEFAULT_READ_LIMIT, Ledger};
