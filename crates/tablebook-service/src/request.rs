//! Booking requests and their validation.
//!
//! Everything a caller types is checked here so the matching code only ever
//! sees a weekday in range, a parsed start time and a positive duration.

use tablebook_hours::model::{TimeSpec, Weekday, weekday_from_index, weekday_label};

use crate::error::{ServiceError, ServiceResult};

/// The slot a caller wants: a weekday, a start time and a length in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    weekday: Weekday,
    start: TimeSpec,
    duration_minutes: u32,
}

impl BookingRequest {
    /// ## Errors
    /// Returns `InvalidInput` if the duration is zero.
    pub fn new(weekday: Weekday, start: TimeSpec, duration_minutes: u32) -> ServiceResult<Self> {
        if duration_minutes == 0 {
            return Err(ServiceError::InvalidInput(
                "duration must be at least one minute".to_string(),
            ));
        }

        Ok(Self {
            weekday,
            start,
            duration_minutes,
        })
    }

    /// Builds a request from a weekday index (Mon=0 … Sun=6), start time
    /// text and a duration in minutes.
    ///
    /// ## Errors
    /// Returns `InvalidInput` if the weekday is outside `0..=6`, the start
    /// time does not parse, or the duration is not positive.
    pub fn from_parts(weekday: i64, start_text: &str, duration_minutes: i64) -> ServiceResult<Self> {
        let day = u8::try_from(weekday)
            .ok()
            .and_then(weekday_from_index)
            .ok_or_else(|| {
                ServiceError::InvalidInput(format!("weekday must be between 0 and 6, got {weekday}"))
            })?;

        let start = TimeSpec::parse(start_text)
            .map_err(|e| ServiceError::InvalidInput(format!("could not read start time ({e})")))?;

        let minutes = u32::try_from(duration_minutes).map_err(|_e| {
            ServiceError::InvalidInput(format!(
                "duration must be a positive number of minutes, got {duration_minutes}"
            ))
        })?;

        Self::new(day, start, minutes)
    }

    /// Builds a request from raw text as typed at a prompt.
    ///
    /// ## Errors
    /// Returns `InvalidInput` if the weekday or duration is not an integer,
    /// or for any reason listed on [`from_parts`](Self::from_parts).
    pub fn parse(weekday_text: &str, start_text: &str, duration_text: &str) -> ServiceResult<Self> {
        let weekday = parse_integer("weekday", weekday_text)?;
        let duration = parse_integer("duration", duration_text)?;

        Self::from_parts(weekday, start_text, duration)
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[must_use]
    pub const fn start(&self) -> TimeSpec {
        self.start
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn end(&self) -> TimeSpec {
        self.start.add_minutes(self.duration_minutes)
    }
}

impl std::fmt::Display for BookingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} for {} min",
            weekday_label(self.weekday),
            self.start,
            self.duration_minutes
        )
    }
}

fn parse_integer(field: &str, text: &str) -> ServiceResult<i64> {
    text.trim().parse().map_err(|_e| {
        ServiceError::InvalidInput(format!("{field} must be a whole number, got `{}`", text.trim()))
    })
}
