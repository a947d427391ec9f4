pub mod day_close;
pub mod worked;
