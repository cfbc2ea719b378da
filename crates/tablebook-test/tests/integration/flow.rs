//! The command-line flow without a terminal: flags or prompt answers in,
//! outcome text out.

use std::io::Cursor;

use clap::Parser;
use tablebook_test::app::cli::Cli;
use tablebook_test::app::config::{Settings, dataset_path, period_parser};
use tablebook_test::app::prompt;
use tablebook_test::app::report::Outcome;
use tablebook_test::fixture_path;
use tablebook_test::service::AvailabilityIndex;

use super::helpers::SAMPLE;

fn run(cli: &Cli, stdin: &str) -> String {
    let settings = Settings::from_toml_str("").unwrap();
    let index =
        AvailabilityIndex::from_path(&dataset_path(&settings, cli), &period_parser(&settings, cli))
            .unwrap();

    let booking = match cli.booking() {
        Some(booking) => booking,
        None => prompt::ask(&mut Cursor::new(stdin), &mut Vec::new()).unwrap(),
    };

    Outcome::from_query(index.query_text(&booking.day, &booking.at, &booking.duration))
        .unwrap()
        .to_string()
}

fn sample_flag() -> String {
    fixture_path(SAMPLE).display().to_string()
}

#[test_log::test]
fn flags_report_available_venues() {
    let dataset = sample_flag();
    let cli = Cli::try_parse_from([
        "tablebook",
        "--dataset",
        dataset.as_str(),
        "--day",
        "6",
        "--at",
        "10:00 pm",
        "--duration",
        "40",
    ])
    .unwrap();

    assert_eq!(run(&cli, ""), "Available venues: Rose Pistola");
}

#[test_log::test]
fn prompted_booking_with_no_match() {
    let dataset = sample_flag();
    let cli = Cli::try_parse_from(["tablebook", "--dataset", dataset.as_str()]).unwrap();

    assert_eq!(
        run(&cli, "1\n8:00 am\n30\n"),
        "No available venue for booking"
    );
}

#[test_log::test]
fn prompted_garbage_is_reported_as_invalid() {
    let dataset = sample_flag();
    let cli = Cli::try_parse_from(["tablebook", "--dataset", dataset.as_str()]).unwrap();

    assert!(run(&cli, "9\n10 am\n30\n").starts_with("Invalid input: "));
}

#[test_log::test]
fn closed_stdin_is_invalid_input() {
    let dataset = sample_flag();
    let cli = Cli::try_parse_from(["tablebook", "--dataset", dataset.as_str()]).unwrap();

    assert!(run(&cli, "").starts_with("Invalid input: "));
}
