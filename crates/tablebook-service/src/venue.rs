use std::fmt;

use tablebook_hours::ParseResult;
use tablebook_hours::model::{ReservablePeriod, TimeSpec, Weekday};

use crate::request::BookingRequest;

/// A bookable establishment and its weekly reservable periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    name: String,
    periods: Vec<ReservablePeriod>,
}

impl Venue {
    /// Creates a venue with no periods; it matches nothing until
    /// [`set_periods`](Self::set_periods) is called.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            periods: Vec::new(),
        }
    }

    /// Replaces the period list wholesale.
    pub fn set_periods(&mut self, periods: Vec<ReservablePeriod>) {
        self.periods = periods;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn periods(&self) -> &[ReservablePeriod] {
        &self.periods
    }

    /// True if any period admits the slot.
    #[must_use]
    pub fn is_available(&self, day: Weekday, start: TimeSpec, duration_minutes: u32) -> bool {
        self.periods
            .iter()
            .any(|period| period.is_available(day, start, duration_minutes))
    }

    /// Text form of [`is_available`](Self::is_available).
    ///
    /// ## Errors
    /// Returns an `InvalidTime` error if `start_text` does not parse.
    pub fn is_available_text(
        &self,
        day: Weekday,
        start_text: &str,
        duration_minutes: u32,
    ) -> ParseResult<bool> {
        Ok(self.is_available(day, TimeSpec::parse(start_text)?, duration_minutes))
    }

    #[must_use]
    pub fn accepts(&self, request: &BookingRequest) -> bool {
        self.is_available(
            request.weekday(),
            request.start(),
            request.duration_minutes(),
        )
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
