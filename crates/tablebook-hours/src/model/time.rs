use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, TimeDelta, Timelike};

use crate::parse::grammar::TIME_RE;
use crate::parse::{ParseError, ParseResult};

/// A wall-clock time of day (hour and minute, no date).
///
/// Ordering is by hour, then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpec(NaiveTime);

impl TimeSpec {
    /// Builds a time from a 24-hour clock value.
    #[must_use]
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses `H:MM am/pm` or `H am/pm`.
    ///
    /// The hour is a 12-hour clock value (1–12); `12 am` is midnight and
    /// `12 pm` is noon. The meridiem is case-insensitive and may follow the
    /// digits with or without a space.
    ///
    /// ## Errors
    /// Returns an `InvalidTime` error if the text matches neither form or the
    /// hour/minute is out of range.
    pub fn parse(text: &str) -> ParseResult<Self> {
        let caps = TIME_RE
            .captures(text)
            .ok_or_else(|| ParseError::invalid_time(text))?;

        let hour12: u32 = caps["hour"]
            .parse()
            .map_err(|_e| ParseError::invalid_time(text))?;
        let minute: u32 = match caps.name("minute") {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_e| ParseError::invalid_time(text))?,
            None => 0,
        };
        let is_pm = caps["meridiem"].eq_ignore_ascii_case("pm");

        if !(1..=12).contains(&hour12) {
            return Err(ParseError::invalid_time(text));
        }

        let hour = hour12 % 12 + if is_pm { 12 } else { 0 };
        Self::from_hm(hour, minute).ok_or_else(|| ParseError::invalid_time(text))
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Adds `minutes` to this time of day.
    ///
    /// Crossing midnight wraps into the early hours (`11:50 pm` + 40 is
    /// `12:30 am`); the day that was crossed is discarded.
    #[must_use]
    pub fn add_minutes(self, minutes: u32) -> Self {
        let (time, _overflow_secs) = self
            .0
            .overflowing_add_signed(TimeDelta::minutes(i64::from(minutes)));
        Self(time)
    }
}

impl FromStr for TimeSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        let meridiem = if hour < 12 { "am" } else { "pm" };
        write!(f, "{hour12}:{:02} {meridiem}", self.minute())
    }
}
