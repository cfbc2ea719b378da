use std::io::{self, Write};

use clap::Parser;
use tablebook_app::cli::Cli;
use tablebook_app::config::{dataset_path, load_config, period_parser};
use tablebook_app::prompt;
use tablebook_app::report::Outcome;
use tablebook_core::constants::DEFAULT_LOG_LEVEL;
use tablebook_service::AvailabilityIndex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping default");
    }

    let path = dataset_path(&config, &cli);
    let parser = period_parser(&config, &cli);
    let index = AvailabilityIndex::from_path(&path, &parser)?;

    tracing::info!(path = %path.display(), venues = index.len(), "Dataset loaded");

    let booking = match cli.booking() {
        Some(booking) => booking,
        None => prompt::ask(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let outcome = Outcome::from_query(index.query_text(
        &booking.day,
        &booking.at,
        &booking.duration,
    ))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{outcome}")?;

    Ok(())
}
