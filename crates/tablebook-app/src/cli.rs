use std::path::PathBuf;

use clap::Parser;
use tablebook_core::types::WindowPolicy;

use crate::prompt::RawBooking;

/// Find venues whose opening hours can take a booking.
///
/// Without `--day`, `--at` and `--duration` the booking is asked for
/// interactively.
#[derive(Debug, Parser)]
#[command(name = "tablebook", version)]
pub struct Cli {
    /// Dataset CSV to load (overrides `dataset.path`).
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// `lenient` or `strict` handling of windows that close before they open.
    #[arg(long, value_name = "POLICY")]
    pub window_policy: Option<WindowPolicy>,

    /// Day to book: 0 = Mon, 1 = Tue, … 6 = Sun.
    #[arg(long, requires_all = ["at", "duration"], allow_hyphen_values = true)]
    pub day: Option<String>,

    /// Start time, e.g. `10:00 am` or `7 pm`.
    #[arg(long, requires_all = ["day", "duration"])]
    pub at: Option<String>,

    /// Length of the booking in minutes.
    #[arg(long, requires_all = ["day", "at"], allow_hyphen_values = true)]
    pub duration: Option<String>,
}

impl Cli {
    /// The booking given on the command line, if any.
    #[must_use]
    pub fn booking(&self) -> Option<RawBooking> {
        match (&self.day, &self.at, &self.duration) {
            (Some(day), Some(at), Some(duration)) => Some(RawBooking {
                day: day.clone(),
                at: at.clone(),
                duration: duration.clone(),
            }),
            _ => None,
        }
    }
}
