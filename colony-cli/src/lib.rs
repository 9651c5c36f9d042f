//! Command-line interface for colony route planning.
//!
//! Two subcommands are provided:
//!
//! - `optimise` orders the waypoints of a JSON request file.
//! - `deliver` finds restaurants near a delivery point through LocationIQ and
//!   plans the route from the chosen restaurant.
//!
//! Options layer from CLI flags, `COLONY_*` environment variables and
//! configuration files via `ortho_config`. Reports are printed to stdout as
//! JSON; logs go to stderr and are filtered by `COLONY_LOG`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod deliver;
mod error;
mod fs;
mod logging;
mod optimise;
mod report;

pub use error::CliError;
pub use report::{DeliveryReport, OptimiseReport};

use deliver::{DeliverArgs, run_deliver};
use optimise::{OptimiseArgs, run_optimise};

pub(crate) const ARG_OPTIMISE_REQUEST: &str = "request";
pub(crate) const ENV_OPTIMISE_REQUEST: &str = "COLONY_CMDS_OPTIMISE_REQUEST_PATH";
pub(crate) const ARG_ITERATIONS: &str = "iterations";
pub(crate) const ARG_ANTS: &str = "ants";
pub(crate) const ARG_EVAPORATION_RATE: &str = "evaporation-rate";
pub(crate) const ARG_ALPHA: &str = "alpha";
pub(crate) const ARG_BETA: &str = "beta";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_LAT: &str = "lat";
pub(crate) const ARG_LON: &str = "lon";
pub(crate) const ARG_ADDRESS: &str = "address";
pub(crate) const ARG_API_KEY: &str = "api-key";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ARG_RADIUS_M: &str = "radius-m";
pub(crate) const ARG_RESTAURANT: &str = "restaurant";
pub(crate) const ENV_DELIVER_LAT: &str = "COLONY_CMDS_DELIVER_LAT";
pub(crate) const ENV_DELIVER_LON: &str = "COLONY_CMDS_DELIVER_LON";
pub(crate) const ENV_DELIVER_API_KEY: &str = "COLONY_CMDS_DELIVER_API_KEY";
/// Shorter alias accepted for the LocationIQ key.
pub(crate) const ENV_API_KEY: &str = "COLONY_API_KEY";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure encountered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init()?;
    match cli.command {
        Command::Optimise(args) => run_optimise(args),
        Command::Deliver(args) => run_deliver(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "colony",
    about = "Plan short routes through waypoints with an ant colony optimiser",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Order the waypoints of a JSON request into a short route.
    Optimise(OptimiseArgs),
    /// Plan a delivery from a nearby restaurant to a location.
    Deliver(DeliverArgs),
}

#[cfg(test)]
mod tests;
