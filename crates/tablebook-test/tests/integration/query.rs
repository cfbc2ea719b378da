use tablebook_test::service::BookingRequest;

use super::helpers::{names_for, sample_index};

#[test_log::test]
fn monday_late_morning() {
    let index = sample_index();

    assert_eq!(
        names_for(&index, "0", "11:00 am", "30"),
        [
            "Mifune Restaurant",
            "The Cheesecake Factory",
            "Canton Seafood & Dim Sum Restaurant",
            "Weekend Brunch Club",
        ]
    );
}

#[test_log::test]
fn sunday_late_booking_needs_the_full_slot() {
    let index = sample_index();

    // Kushi Tsuru and Mifune are open at 10 pm but close before 10:40 pm.
    assert_eq!(names_for(&index, "6", "10:00 pm", "40"), ["Rose Pistola"]);
}

#[test_log::test]
fn closing_time_is_inclusive() {
    let index = sample_index();

    let names = names_for(&index, "6", "1 pm", "60");

    assert_eq!(
        names,
        [
            "Kushi Tsuru",
            "Mifune Restaurant",
            "Rose Pistola",
            "Canton Seafood & Dim Sum Restaurant",
            "Weekend Brunch Club",
        ]
    );
}

#[test_log::test]
fn day_range_wrapping_past_sunday() {
    let index = sample_index();

    assert_eq!(
        names_for(&index, "5", "9:30 am", "60"),
        ["Blue Plate", "Weekend Brunch Club"]
    );
}

#[test_log::test]
fn slot_crossing_midnight_compares_the_wrapped_end() {
    let index = sample_index();

    let names = names_for(&index, "2", "11:50 pm", "40");

    assert_eq!(
        names,
        [
            "Kushi Tsuru",
            "Mifune Restaurant",
            "The Cheesecake Factory",
            "New Delhi Indian Restaurant",
            "Rose Pistola",
            "Canton Seafood & Dim Sum Restaurant",
            "Sudachi",
            "Blue Plate",
        ]
    );
    // Closes at 12 am, which is earlier than the 12:30 am wrapped end.
    assert!(!names.iter().any(|name| name == "Hanuri"));
}

#[test_log::test]
fn nothing_open_early() {
    let index = sample_index();

    assert!(names_for(&index, "1", "8:00 am", "30").is_empty());
}

#[test_log::test]
fn venue_without_periods_never_matches() {
    let index = sample_index();

    for day in 0..7 {
        for at in ["12 am", "9 am", "12 pm", "6 pm", "11:59 pm"] {
            let request = BookingRequest::from_parts(day, at, 1).unwrap();
            assert!(
                index
                    .query(&request)
                    .iter()
                    .all(|venue| venue.name() != "Cafe Borrone")
            );
        }
    }
}

#[test_log::test]
fn invalid_input_is_distinct_from_no_match() {
    let index = sample_index();

    for (day, at, duration) in [
        ("7", "10 am", "30"),
        ("-1", "10 am", "30"),
        ("Mon", "10 am", "30"),
        ("0", "25 pm", "30"),
        ("0", "10", "30"),
        ("0", "10 am", "0"),
        ("0", "10 am", "-5"),
        ("0", "10 am", "half an hour"),
    ] {
        let err = index.query_text(day, at, duration).unwrap_err();
        assert!(err.is_invalid_input(), "{day:?} {at:?} {duration:?}: {err}");
    }
}
