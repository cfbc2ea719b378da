//! Extraction of reservable periods from free text.
//!
//! A dataset field such as
//!
//! ```text
//! Mon-Thu 11 am - 10:30 pm  / Fri-Sat 11 am - 11 pm  / Sun 5 pm - 9 pm
//! ```
//!
//! is scanned left to right for `<Day>-<Day> <time> - <time>` clauses. Every
//! clause that matches the whole grammar becomes one [`ReservablePeriod`];
//! anything else (the single-day `Sun ...` above, stray words, separators)
//! is skipped without error. A clause that matches the grammar but carries an
//! impossible value such as `13 pm` is a hard error.

mod error;
pub(crate) mod grammar;

use tablebook_core::types::WindowPolicy;

use crate::model::ReservablePeriod;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use grammar::{CLAUSE_PATTERN, TIME_PATTERN};

/// Scans opening-hours text into periods.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodParser {
    policy: WindowPolicy,
}

impl PeriodParser {
    #[must_use]
    pub const fn new(policy: WindowPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> WindowPolicy {
        self.policy
    }

    /// Returns every period clause found in `raw`, in order of appearance.
    ///
    /// ## Errors
    /// Returns an error if a matched clause carries an out-of-range time, or,
    /// under [`WindowPolicy::Strict`], if a clause closes before it opens.
    pub fn parse(&self, raw: &str) -> ParseResult<Vec<ReservablePeriod>> {
        grammar::CLAUSE_RE
            .captures_iter(raw)
            .map(|caps| {
                let period =
                    ReservablePeriod::parse(&caps["from"], &caps["to"], &caps["open"], &caps["close"])?;

                if self.policy == WindowPolicy::Strict && period.is_inverted() {
                    return Err(ParseError::inverted_window(&caps[0]));
                }

                tracing::trace!(clause = &caps[0], period = %period, "Parsed period clause");
                Ok(period)
            })
            .collect()
    }
}

/// Parses with the default (lenient) policy.
///
/// ## Errors
/// See [`PeriodParser::parse`].
pub fn parse_periods(raw: &str) -> ParseResult<Vec<ReservablePeriod>> {
    PeriodParser::default().parse(raw)
}
