use std::sync::Arc;

use tablebook_test::core_types::types::WindowPolicy;
use tablebook_test::fixture_path;
use tablebook_test::hours::parse::PeriodParser;
use tablebook_test::service::{AvailabilityIndex, SharedIndex};

use super::helpers::{BAD_TIME, SAMPLE, names_for, sample_index};

#[test_log::test]
fn failed_reload_keeps_previous_venues() {
    let mut index = sample_index();

    let result = index.load_path(&fixture_path(BAD_TIME), &PeriodParser::default());

    assert!(result.is_err());
    assert_eq!(index.len(), 13);
    assert_eq!(names_for(&index, "6", "10:00 pm", "40"), ["Rose Pistola"]);
}

#[test_log::test]
fn strict_reload_failure_keeps_lenient_index() {
    let mut index = sample_index();

    let result = index.load_path(
        &fixture_path(SAMPLE),
        &PeriodParser::new(WindowPolicy::Strict),
    );

    assert!(result.is_err());
    assert_eq!(index.len(), 13);
}

#[test_log::test]
fn shared_index_publishes_reload() {
    let shared = SharedIndex::new(AvailabilityIndex::new());
    let before = shared.snapshot().unwrap();

    let loaded = shared
        .reload_path(&fixture_path(SAMPLE), &PeriodParser::default())
        .unwrap();

    assert_eq!(loaded, 13);
    assert!(before.is_empty());
    assert_eq!(shared.snapshot().unwrap().len(), 13);
}

#[test_log::test]
fn readers_keep_their_snapshot_while_reloading() {
    let shared = Arc::new(SharedIndex::new(sample_index()));
    let held = shared.snapshot().unwrap();

    let writer = {
        let shared = Arc::clone(&shared);
        std::thread::spawn(move || {
            shared.publish(AvailabilityIndex::new()).unwrap();
        })
    };
    writer.join().unwrap();

    assert_eq!(held.len(), 13);
    assert!(shared.snapshot().unwrap().is_empty());
}
