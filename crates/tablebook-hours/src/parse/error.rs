//! Opening-hours parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for opening-hours parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A time, weekday label or window that could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: `{input}`")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The text that was rejected.
    pub input: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    #[must_use]
    pub fn invalid_time(input: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidTime, input)
    }

    #[must_use]
    pub fn invalid_weekday(input: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidWeekday, input)
    }

    #[must_use]
    pub fn inverted_window(input: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvertedWindow, input)
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not `H am/pm` or `H:MM am/pm`, or hour/minute out of range.
    InvalidTime,
    /// Not one of the three-letter weekday labels.
    InvalidWeekday,
    /// Open time later than close time (strict policy only).
    InvertedWindow,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTime => write!(f, "invalid time"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::InvertedWindow => write!(f, "window closes before it opens"),
        }
    }
}
