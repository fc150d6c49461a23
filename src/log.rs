use std::io::stderr;

use anyhow::{anyhow, Result};
use tracing_appender::rolling::hourly;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Hourly rolling files under `./logs/`, for when the terminal is in use.
    File,
}

pub fn init(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_level(true)
        .with_line_number(false)
        .with_target(true);

    match target {
        LogTarget::Stderr => builder.with_ansi(true).with_writer(stderr).compact().try_init(),
        LogTarget::File => builder
            .with_ansi(false)
            .with_writer(hourly("./logs/", "rub-rates.log"))
            .compact()
            .try_init(),
    }
    .map_err(|error| anyhow!(error).context("Failed to initialize logging!"))
}
