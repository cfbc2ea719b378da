//! Weekly opening hours: time-of-day values, weekday ranges, reservable
//! periods and the parser that extracts them from free text.
//!
//! ## Usage
//!
//! ```rust
//! use tablebook_hours::parse::parse_periods;
//! use tablebook_hours::model::{TimeSpec, Weekday};
//!
//! let periods = parse_periods("Mon-Fri 9:00 am - 5:00 pm").unwrap();
//! let start = TimeSpec::parse("11:00 am").unwrap();
//!
//! assert_eq!(periods.len(), 1);
//! assert!(periods[0].is_available(Weekday::Wed, start, 30));
//! assert!(!periods[0].is_available(Weekday::Sat, start, 30));
//! ```

pub mod model;
pub mod parse;

pub use parse::{ParseError, ParseErrorKind, ParseResult};
