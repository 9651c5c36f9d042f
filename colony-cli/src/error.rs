//! Error types emitted by the colony CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use colony_core::{ConfigurationError, LookupError, OptimiseError};
use colony_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the colony CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the path.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the optimise request file failed.
    #[error("failed to open optimise request at {path:?}: {source}")]
    OpenOptimiseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Optimise request JSON could not be decoded.
    #[error("failed to parse optimise request JSON at {path:?}: {source}")]
    ParseOptimiseRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Colony parameters were rejected.
    #[error("invalid colony configuration: {0}")]
    InvalidColonyConfiguration(#[source] ConfigurationError),
    /// A coordinate option fell outside its valid range.
    #[error("{field} value {value} is outside [{min}, {max}]")]
    InvalidCoordinate {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Value supplied.
        value: f64,
        /// Smallest accepted value.
        min: f64,
        /// Largest accepted value.
        max: f64,
    },
    /// The optimiser failed.
    #[error("optimisation failed: {source}")]
    Optimise {
        /// Optimiser failure.
        source: OptimiseError,
    },
    /// Constructing the LocationIQ client failed.
    #[error("failed to build lookup client for {base_url:?}: {source}")]
    BuildLookupClient {
        /// Base URL as configured.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ClientBuildError,
    },
    /// A geocoding or nearby-place lookup failed.
    #[error("location lookup failed: {0}")]
    Lookup(#[source] LookupError),
    /// The delivery address could not be geocoded.
    #[error("no location found for address {address:?}")]
    AddressNotFound {
        /// Address as supplied.
        address: String,
    },
    /// No places were found around the delivery location.
    #[error("no restaurants found within {radius_m} m of the delivery location")]
    NoPlacesFound {
        /// Search radius in metres.
        radius_m: u32,
    },
    /// The selected restaurant index exceeds the places found.
    #[error("restaurant {index} is out of range; {available} found")]
    RestaurantOutOfRange {
        /// Index requested.
        index: usize,
        /// Number of places found.
        available: usize,
    },
    /// Serialising a report failed.
    #[error("failed to serialise report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    LoggerInit(#[source] tracing_subscriber::util::TryInitError),
}

impl From<OptimiseError> for CliError {
    fn from(source: OptimiseError) -> Self {
        Self::Optimise { source }
    }
}
