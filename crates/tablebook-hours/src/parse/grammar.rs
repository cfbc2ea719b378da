//! Lexical grammar for opening-hours text.
//!
//! A clause looks like `Mon-Fri 9:00 am - 10 pm`. The pieces below are the
//! only definition of that grammar; both the clause scanner and
//! [`TimeSpec::parse`](crate::model::TimeSpec::parse) are compiled from them.

use std::sync::LazyLock;

use regex_lite::Regex;

const DAY: &str = "mon|tue|wed|thu|fri|sat|sun";
const HOUR: &str = r"\d{1,2}";
const MINUTE: &str = r"\d{2}";
const MERIDIEM: &str = "[ap]m";

/// A clock time without captures, as embedded in a clause. The meridiem must
/// end a word, so `5 pmish` is not a time.
const CLOCK: &str = const_str::concat!(HOUR, "(?::", MINUTE, r")?\s*", MERIDIEM, r"\b");

/// A standalone clock time with `hour`, `minute` and `meridiem` captures.
pub const TIME_PATTERN: &str = const_str::concat!(
    r"(?i)^\s*(?P<hour>",
    HOUR,
    ")(?::(?P<minute>",
    MINUTE,
    r"))?\s*(?P<meridiem>",
    MERIDIEM,
    r")\s*$"
);

/// One period clause with `from`, `to`, `open` and `close` captures.
pub const CLAUSE_PATTERN: &str = const_str::concat!(
    r"(?i)\b(?P<from>",
    DAY,
    ")-(?P<to>",
    DAY,
    r")\s+(?P<open>",
    CLOCK,
    r")\s*-\s*(?P<close>",
    CLOCK,
    ")"
);

#[expect(
    clippy::expect_used,
    reason = "Pattern is a compile-time constant covered by tests"
)]
pub(crate) static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIME_PATTERN).expect("time pattern compiles"));

#[expect(
    clippy::expect_used,
    reason = "Pattern is a compile-time constant covered by tests"
)]
pub(crate) static CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLAUSE_PATTERN).expect("clause pattern compiles"));
