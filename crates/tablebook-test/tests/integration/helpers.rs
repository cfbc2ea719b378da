#![allow(clippy::expect_used, dead_code)]
//! Shared setup for integration tests.

use tablebook_test::fixture_path;
use tablebook_test::hours::parse::PeriodParser;
use tablebook_test::service::AvailabilityIndex;

pub const SAMPLE: &str = "restaurant_reservation_hours.csv";
pub const BAD_TIME: &str = "bad_time.csv";
pub const MISSING_HOURS: &str = "missing_hours.csv";

/// The sample dataset loaded with the lenient default parser.
pub fn sample_index() -> AvailabilityIndex {
    AvailabilityIndex::from_path(&fixture_path(SAMPLE), &PeriodParser::default())
        .expect("sample fixture should load")
}

/// Venue names available for a textual booking, in dataset order.
pub fn names_for(index: &AvailabilityIndex, day: &str, at: &str, duration: &str) -> Vec<String> {
    index
        .query_text(day, at, duration)
        .expect("booking should be valid")
        .into_iter()
        .map(|venue| venue.name().to_string())
        .collect()
}
