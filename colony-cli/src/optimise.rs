//! `optimise` command implementation.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use colony_core::{OptimiseRequest, RouteOptimiser};
use colony_solver_aco::{ColonyConfig, ColonyOptimiser};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::fs::{file_is_file, open_utf8_file};
use crate::report::OptimiseReport;
use crate::{
    ARG_ALPHA, ARG_ANTS, ARG_BETA, ARG_EVAPORATION_RATE, ARG_ITERATIONS, ARG_OPTIMISE_REQUEST,
    ARG_SEED, CliError, ENV_OPTIMISE_REQUEST,
};

/// CLI arguments for the `optimise` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimise",
    long_about = "Order the waypoints of a JSON-encoded OptimiseRequest into a \
                 short route that starts at the first waypoint. Colony \
                 parameters can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Optimise the order of a set of waypoints"
)]
#[ortho_config(prefix = "COLONY")]
pub(crate) struct OptimiseArgs {
    /// Path to a JSON file containing an OptimiseRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Iterations to run (default 50).
    #[arg(long = ARG_ITERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) iterations: Option<usize>,
    /// Ants released per iteration (default 20).
    #[arg(long = ARG_ANTS, value_name = "count")]
    #[serde(default)]
    pub(crate) ants: Option<usize>,
    /// Fraction of pheromone evaporated per iteration (default 0.5).
    #[arg(long = ARG_EVAPORATION_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) evaporation_rate: Option<f64>,
    /// Pheromone exponent (default 1).
    #[arg(long = ARG_ALPHA, value_name = "exponent")]
    #[serde(default)]
    pub(crate) alpha: Option<f64>,
    /// Inverse-distance exponent (default 2).
    #[arg(long = ARG_BETA, value_name = "exponent")]
    #[serde(default)]
    pub(crate) beta: Option<f64>,
    /// Seed overriding the one in the request file.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl OptimiseArgs {
    pub(crate) fn into_config(self) -> Result<OptimiseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimiseConfig::try_from(merged)
    }
}

/// Optional overrides applied on top of [`ColonyConfig::default`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ColonyOverrides {
    pub(crate) iterations: Option<usize>,
    pub(crate) ants: Option<usize>,
    pub(crate) evaporation_rate: Option<f64>,
    pub(crate) alpha: Option<f64>,
    pub(crate) beta: Option<f64>,
}

impl ColonyOverrides {
    pub(crate) fn resolve(self) -> Result<ColonyConfig, CliError> {
        let defaults = ColonyConfig::default();
        let config = ColonyConfig {
            iterations: self.iterations.unwrap_or(defaults.iterations),
            ants: self.ants.unwrap_or(defaults.ants),
            evaporation_rate: self.evaporation_rate.unwrap_or(defaults.evaporation_rate),
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
        };
        config
            .validate()
            .map_err(CliError::InvalidColonyConfiguration)?;
        Ok(config)
    }
}

/// Resolved `optimise` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimiseConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Validated colony parameters.
    pub(crate) colony: ColonyConfig,
    /// Seed replacing the request's own.
    pub(crate) seed: Option<u64>,
}

impl OptimiseConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_OPTIMISE_REQUEST)
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

impl TryFrom<OptimiseArgs> for OptimiseConfig {
    type Error = CliError;

    fn try_from(args: OptimiseArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMISE_REQUEST,
            env: ENV_OPTIMISE_REQUEST,
        })?;
        let colony = ColonyOverrides {
            iterations: args.iterations,
            ants: args.ants,
            evaporation_rate: args.evaporation_rate,
            alpha: args.alpha,
            beta: args.beta,
        }
        .resolve()?;
        Ok(Self {
            request_path,
            colony,
            seed: args.seed,
        })
    }
}

pub(crate) fn run_optimise(args: OptimiseArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimise_with(args, &mut stdout)
}

pub(crate) fn run_optimise_with(args: OptimiseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_optimise(&config)?;
    write_report(writer, &report)
}

fn execute_optimise(config: &OptimiseConfig) -> Result<OptimiseReport, CliError> {
    let mut request = load_optimise_request(&config.request_path)?;
    if config.seed.is_some() {
        request.seed = config.seed;
    }
    tracing::info!(
        waypoints = request.waypoints.len(),
        iterations = config.colony.iterations,
        ants = config.colony.ants,
        "optimising route"
    );
    let response = ColonyOptimiser::new(config.colony).optimise(&request)?;
    tracing::info!(
        distance_km = response.route.distance_km(),
        best_iteration = response.diagnostics.best_iteration,
        "route optimised"
    );
    Ok(OptimiseReport::from(response))
}

/// Loads a JSON-encoded [`OptimiseRequest`] from disk.
pub(crate) fn load_optimise_request(path: &Utf8Path) -> Result<OptimiseRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOptimiseRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseOptimiseRequest {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimiseConfig, CliError> {
    let merged = OptimiseArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimiseConfig::try_from(merged)
}
