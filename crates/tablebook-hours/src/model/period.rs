use std::fmt;

use super::day::{DayRange, Weekday};
use super::time::TimeSpec;
use crate::parse::ParseResult;

/// A recurring weekly window: a range of weekdays plus opening and closing
/// times that apply on each of those days.
///
/// `open <= close` is not checked here. An inverted window (`10 pm - 2 am`)
/// only fits slots whose wrapped end lands before the close time, i.e. slots
/// that start after opening and run past midnight.
/// [`PeriodParser`](crate::parse::PeriodParser) can be told to reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservablePeriod {
    days: DayRange,
    open: TimeSpec,
    close: TimeSpec,
}

impl ReservablePeriod {
    #[must_use]
    pub const fn new(days: DayRange, open: TimeSpec, close: TimeSpec) -> Self {
        Self { days, open, close }
    }

    /// Builds a period from its textual fields, e.g.
    /// `("Mon", "Fri", "9:00 am", "10 pm")`.
    ///
    /// ## Errors
    /// Returns the first weekday or time error encountered.
    pub fn parse(
        from_label: &str,
        to_label: &str,
        open_text: &str,
        close_text: &str,
    ) -> ParseResult<Self> {
        Ok(Self::new(
            DayRange::parse(from_label, to_label)?,
            TimeSpec::parse(open_text)?,
            TimeSpec::parse(close_text)?,
        ))
    }

    #[must_use]
    pub const fn days(&self) -> DayRange {
        self.days
    }

    #[must_use]
    pub const fn open(&self) -> TimeSpec {
        self.open
    }

    #[must_use]
    pub const fn close(&self) -> TimeSpec {
        self.close
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.open > self.close
    }

    #[must_use]
    pub const fn covers_day(&self, day: Weekday) -> bool {
        self.days.contains(day)
    }

    /// Returns true if a slot of `duration_minutes` starting at `start` lies
    /// inside `[open, close]`.
    ///
    /// The end time is computed modulo one day and compared as-is: a slot
    /// running past midnight is judged by its wrapped end (`11:50 pm` + 40
    /// ends at `12:30 am`).
    #[must_use]
    pub fn fits_slot(&self, start: TimeSpec, duration_minutes: u32) -> bool {
        let end = start.add_minutes(duration_minutes);
        start >= self.open && end <= self.close
    }

    /// Text form of [`fits_slot`](Self::fits_slot).
    ///
    /// ## Errors
    /// Returns an `InvalidTime` error if `start_text` does not parse.
    pub fn fits_slot_text(&self, start_text: &str, duration_minutes: u32) -> ParseResult<bool> {
        Ok(self.fits_slot(TimeSpec::parse(start_text)?, duration_minutes))
    }

    #[must_use]
    pub fn is_available(&self, day: Weekday, start: TimeSpec, duration_minutes: u32) -> bool {
        self.covers_day(day) && self.fits_slot(start, duration_minutes)
    }
}

impl fmt::Display for ReservablePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.days, self.open, self.close)
    }
}
