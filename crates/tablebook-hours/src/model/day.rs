use std::fmt;

pub use chrono::Weekday;

use crate::parse::{ParseError, ParseResult};

const LABELS: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

/// Parses a three-letter weekday label (`Mon` … `Sun`, case-insensitive).
///
/// ## Errors
/// Returns an `InvalidWeekday` error for anything else, including full names.
pub fn parse_weekday(label: &str) -> ParseResult<Weekday> {
    LABELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|&(_, day)| day)
        .ok_or_else(|| ParseError::invalid_weekday(label))
}

/// Maps `0..=6` to Monday..Sunday.
#[must_use]
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    Weekday::try_from(index).ok()
}

/// Monday is 0, Sunday is 6.
#[must_use]
pub const fn weekday_index(day: Weekday) -> u8 {
    match day {
        Weekday::Mon => 0,
        Weekday::Tue => 1,
        Weekday::Wed => 2,
        Weekday::Thu => 3,
        Weekday::Fri => 4,
        Weekday::Sat => 5,
        Weekday::Sun => 6,
    }
}

#[must_use]
pub const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// An inclusive range of weekdays walked forward from `start` to `end`.
///
/// When `end` comes before `start` in the week the range wraps past Sunday,
/// so `Sat-Mon` covers Saturday, Sunday and Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    start: Weekday,
    end: Weekday,
}

impl DayRange {
    #[must_use]
    pub const fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }

    /// Parses a range from its two endpoint labels.
    ///
    /// ## Errors
    /// Returns an `InvalidWeekday` error if either label is unknown.
    pub fn parse(from_label: &str, to_label: &str) -> ParseResult<Self> {
        Ok(Self::new(parse_weekday(from_label)?, parse_weekday(to_label)?))
    }

    #[must_use]
    pub const fn start(self) -> Weekday {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> Weekday {
        self.end
    }

    #[must_use]
    pub const fn wraps(self) -> bool {
        weekday_index(self.end) < weekday_index(self.start)
    }

    /// Returns true if `day` lies on the forward walk from start to end.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        let start = weekday_index(self.start);
        let end = weekday_index(self.end);
        let day = weekday_index(day);

        if start <= end {
            start <= day && day <= end
        } else {
            day >= start || day <= end
        }
    }

    /// Covered weekdays in walk order.
    pub fn days(self) -> impl Iterator<Item = Weekday> {
        let end = self.end;
        std::iter::successors(Some(self.start), move |day| {
            (*day != end).then(|| day.succ())
        })
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            weekday_label(self.start),
            weekday_label(self.end)
        )
    }
}
