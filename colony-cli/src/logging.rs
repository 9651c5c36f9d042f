//! Log subscriber installation.
//!
//! Library crates emit records through the `log` facade; the subscriber
//! bridges them into `tracing` and writes to stderr so that stdout carries
//! only JSON reports.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::CliError;

/// Environment variable holding the log filter directive.
pub(crate) const LOG_ENV: &str = "COLONY_LOG";

const DEFAULT_FILTER: &str = "warn";

pub(crate) fn init() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(CliError::LoggerInit)
}
