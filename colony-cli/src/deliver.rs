//! `deliver` command implementation.
//!
//! Finds restaurants around the delivery location, picks one by index and
//! plans the route from it to the delivery location.

use clap::Parser;
use colony_core::{Geocoder, OptimiseRequest, PlaceLookup, RouteOptimiser, Waypoint};
use colony_data::{LocationIqClient, LocationIqConfig, locationiq::DEFAULT_BASE_URL};
use colony_solver_aco::{ColonyConfig, ColonyOptimiser};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::optimise::{ColonyOverrides, write_report};
use crate::report::{DeliveryReport, OptimiseReport};
use crate::{
    ARG_ADDRESS, ARG_ANTS, ARG_API_KEY, ARG_BASE_URL, ARG_ITERATIONS, ARG_LAT, ARG_LON,
    ARG_RADIUS_M, ARG_RESTAURANT, ARG_SEED, CliError, ENV_API_KEY, ENV_DELIVER_API_KEY,
    ENV_DELIVER_LAT, ENV_DELIVER_LON,
};

/// Default nearby search radius in metres.
pub(crate) const DEFAULT_RADIUS_M: u32 = 10_000;

/// CLI arguments for the `deliver` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "deliver",
    long_about = "Look up restaurants near a delivery location with LocationIQ, \
                 choose one by index, and plan the route from it to the \
                 delivery location. The location is given as --lat/--lon or \
                 as an --address to geocode.",
    about = "Plan a restaurant delivery"
)]
#[ortho_config(prefix = "COLONY")]
pub(crate) struct DeliverArgs {
    /// Latitude of the delivery location.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the delivery location.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Address to geocode when no coordinates are given.
    #[arg(long = ARG_ADDRESS, value_name = "text")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// LocationIQ access token.
    #[arg(long = ARG_API_KEY, value_name = "key")]
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    /// LocationIQ base URL.
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    /// Search radius around the delivery location in metres (default 10000).
    #[arg(long = ARG_RADIUS_M, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius_m: Option<u32>,
    /// Index of the restaurant to deliver from (default 0, the first found).
    #[arg(long = ARG_RESTAURANT, value_name = "index")]
    #[serde(default)]
    pub(crate) restaurant: Option<usize>,
    /// Iterations to run (default 50).
    #[arg(long = ARG_ITERATIONS, value_name = "count")]
    #[serde(default)]
    pub(crate) iterations: Option<usize>,
    /// Ants released per iteration (default 20).
    #[arg(long = ARG_ANTS, value_name = "count")]
    #[serde(default)]
    pub(crate) ants: Option<usize>,
    /// Seed for a reproducible route.
    #[arg(long = ARG_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl DeliverArgs {
    pub(crate) fn into_config(self) -> Result<DeliverConfig, CliError> {
        let mut merged = self.load_and_merge().map_err(CliError::Configuration)?;
        if merged.api_key.is_none() {
            merged.api_key = std::env::var(ENV_API_KEY).ok();
        }
        DeliverConfig::try_from(merged)
    }
}

/// Where the delivery goes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Destination {
    /// Known coordinates.
    Coordinates(Waypoint),
    /// Free-form address to geocode.
    Address(String),
}

/// Resolved `deliver` command configuration.
#[derive(Clone, PartialEq)]
pub(crate) struct DeliverConfig {
    pub(crate) destination: Destination,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) radius_m: u32,
    pub(crate) restaurant: usize,
    pub(crate) colony: ColonyConfig,
    pub(crate) seed: Option<u64>,
}

impl std::fmt::Debug for DeliverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverConfig")
            .field("destination", &self.destination)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("radius_m", &self.radius_m)
            .field("restaurant", &self.restaurant)
            .field("colony", &self.colony)
            .field("seed", &self.seed)
            .finish()
    }
}

impl TryFrom<DeliverArgs> for DeliverConfig {
    type Error = CliError;

    fn try_from(args: DeliverArgs) -> Result<Self, Self::Error> {
        let destination = resolve_destination(args.lat, args.lon, args.address)?;
        let api_key = args
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_API_KEY,
                env: ENV_DELIVER_API_KEY,
            })?;
        let colony = ColonyOverrides {
            iterations: args.iterations,
            ants: args.ants,
            ..ColonyOverrides::default()
        }
        .resolve()?;
        Ok(Self {
            destination,
            api_key,
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            radius_m: args.radius_m.unwrap_or(DEFAULT_RADIUS_M),
            restaurant: args.restaurant.unwrap_or(0),
            colony,
            seed: args.seed,
        })
    }
}

fn resolve_destination(
    lat: Option<f64>,
    lon: Option<f64>,
    address: Option<String>,
) -> Result<Destination, CliError> {
    match (lat, lon, address) {
        (Some(lat), Some(lon), _) => Ok(Destination::Coordinates(Waypoint::new(
            check_range(ARG_LAT, lat, 90.0)?,
            check_range(ARG_LON, lon, 180.0)?,
        ))),
        (None, None, Some(address)) if !address.trim().is_empty() => {
            Ok(Destination::Address(address))
        }
        (Some(_), None, _) => Err(CliError::MissingArgument {
            field: ARG_LON,
            env: ENV_DELIVER_LON,
        }),
        _ => Err(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_DELIVER_LAT,
        }),
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<f64, CliError> {
    if (-limit..=limit).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::InvalidCoordinate {
            field,
            value,
            min: -limit,
            max: limit,
        })
    }
}

/// Lookup backend able to geocode addresses and search nearby places.
pub(crate) trait DeliveryLookup: Geocoder + PlaceLookup {}

impl<T: Geocoder + PlaceLookup> DeliveryLookup for T {}

/// Builds the lookup backend for the current `deliver` invocation.
pub(crate) trait DeliveryLookupBuilder {
    fn build(&self, config: &DeliverConfig) -> Result<Box<dyn DeliveryLookup>, CliError>;
}

pub(crate) struct LocationIqLookupBuilder;

impl DeliveryLookupBuilder for LocationIqLookupBuilder {
    fn build(&self, config: &DeliverConfig) -> Result<Box<dyn DeliveryLookup>, CliError> {
        let client_config =
            LocationIqConfig::new(config.api_key.clone()).with_base_url(config.base_url.clone());
        let client = LocationIqClient::with_config(client_config).map_err(|source| {
            CliError::BuildLookupClient {
                base_url: config.base_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(client))
    }
}

pub(crate) fn run_deliver(args: DeliverArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_deliver_with(args, &LocationIqLookupBuilder, &mut stdout)
}

pub(crate) fn run_deliver_with(
    args: DeliverArgs,
    builder: &dyn DeliveryLookupBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_deliver(&config, builder)?;
    write_report(writer, &report)
}

pub(crate) fn execute_deliver(
    config: &DeliverConfig,
    builder: &dyn DeliveryLookupBuilder,
) -> Result<DeliveryReport, CliError> {
    let lookup = builder.build(config)?;
    let destination = match &config.destination {
        Destination::Coordinates(waypoint) => *waypoint,
        Destination::Address(address) => lookup
            .geocode(address)
            .map_err(CliError::Lookup)?
            .ok_or_else(|| CliError::AddressNotFound {
                address: address.clone(),
            })?,
    };

    let places = lookup
        .nearby(destination, config.radius_m)
        .map_err(CliError::Lookup)?;
    if places.is_empty() {
        return Err(CliError::NoPlacesFound {
            radius_m: config.radius_m,
        });
    }
    let restaurant = places
        .get(config.restaurant)
        .cloned()
        .ok_or(CliError::RestaurantOutOfRange {
            index: config.restaurant,
            available: places.len(),
        })?;
    tracing::info!(
        restaurant = %restaurant.name,
        candidates = places.len(),
        "planning delivery"
    );

    let request = OptimiseRequest {
        waypoints: vec![restaurant.location, destination],
        seed: config.seed,
    };
    let response = ColonyOptimiser::new(config.colony).optimise(&request)?;
    Ok(DeliveryReport {
        candidates: places.into_iter().map(|place| place.name).collect(),
        restaurant,
        destination,
        plan: OptimiseReport::from(response),
    })
}
