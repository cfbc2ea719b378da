use std::path::PathBuf;

pub use tablebook_core::config::*;
use tablebook_hours::parse::PeriodParser;

use crate::cli::Cli;

/// ## Summary
/// Resolves the dataset path: the command line wins over settings.
#[must_use]
pub fn dataset_path(settings: &Settings, cli: &Cli) -> PathBuf {
    cli.dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.dataset.path))
}

/// ## Summary
/// Builds the period parser from the configured window policy, honouring a
/// command-line override.
#[must_use]
pub fn period_parser(settings: &Settings, cli: &Cli) -> PeriodParser {
    PeriodParser::new(cli.window_policy.unwrap_or(settings.hours.window_policy))
}
