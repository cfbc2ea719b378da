use tablebook_test::core_types::types::WindowPolicy;
use tablebook_test::fixture_path;
use tablebook_test::hours::ParseErrorKind;
use tablebook_test::hours::parse::PeriodParser;
use tablebook_test::service::AvailabilityIndex;
use tablebook_test::service::error::ServiceError;

use super::helpers::{BAD_TIME, MISSING_HOURS, SAMPLE, sample_index};

#[test_log::test]
fn every_row_becomes_a_venue() {
    let index = sample_index();

    assert_eq!(index.len(), 13);
    assert_eq!(index.venues()[0].name(), "Kushi Tsuru");
    assert_eq!(
        index.venues()[7].name(),
        "Canton Seafood & Dim Sum Restaurant"
    );
}

#[test_log::test]
fn only_day_range_clauses_are_kept() {
    let index = sample_index();
    let periods = |i: usize| {
        index.venues()[i]
            .periods()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    };

    // "Mon-Thu, Sun ..." is not a day range, so only the Fri-Sat clause survives.
    assert_eq!(periods(1), ["Fri-Sat 11:30 am - 9:30 pm"]);
    // Single-day "Sun 10 am - 11 pm" is skipped.
    assert_eq!(
        periods(4),
        [
            "Mon-Thu 11:00 am - 11:00 pm",
            "Fri-Sat 11:00 am - 12:30 am"
        ]
    );
    assert_eq!(periods(11), ["Sat-Mon 9:00 am - 2:00 pm"]);
    assert!(periods(12).is_empty());
}

#[test_log::test]
fn strict_policy_rejects_first_inverted_window() {
    let parser = PeriodParser::new(WindowPolicy::Strict);

    let err = AvailabilityIndex::from_path(&fixture_path(SAMPLE), &parser).unwrap_err();

    match err {
        ServiceError::Row {
            line,
            venue,
            source,
        } => {
            assert_eq!(line, 5);
            assert_eq!(venue, "The Cheesecake Factory");
            assert_eq!(source.kind, ParseErrorKind::InvertedWindow);
        }
        other => panic!("expected a row error, got {other:?}"),
    }
}

#[test_log::test]
fn out_of_range_hour_names_the_row() {
    let err = AvailabilityIndex::from_path(&fixture_path(BAD_TIME), &PeriodParser::default())
        .unwrap_err();

    match err {
        ServiceError::Row { line, venue, source } => {
            assert_eq!(line, 2);
            assert_eq!(venue, "Night Market");
            assert_eq!(source.kind, ParseErrorKind::InvalidTime);
        }
        other => panic!("expected a row error, got {other:?}"),
    }
}

#[test_log::test]
fn row_without_hours_is_malformed() {
    let err = AvailabilityIndex::from_path(&fixture_path(MISSING_HOURS), &PeriodParser::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::MalformedRow { line: 2, fields: 1 }
    ));
}

#[test_log::test]
fn missing_file_is_a_load_error() {
    let err = AvailabilityIndex::from_path(
        &fixture_path("does_not_exist.csv"),
        &PeriodParser::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ServiceError::Load { .. }));
    assert!(err.to_string().contains("does_not_exist.csv"));
}
