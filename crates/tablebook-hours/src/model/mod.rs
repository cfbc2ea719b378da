//! Opening-hours value types.
//!
//! All types here are immutable once built; a reload of the dataset builds
//! fresh values rather than mutating existing ones.

mod day;
mod period;
mod time;

pub use day::{DayRange, Weekday, parse_weekday, weekday_from_index, weekday_index, weekday_label};
pub use period::ReservablePeriod;
pub use time::TimeSpec;
