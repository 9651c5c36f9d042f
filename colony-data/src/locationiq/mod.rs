//! LocationIQ geocoding and nearby-place search.
//!
//! [`LocationIqClient`] implements the synchronous [`Geocoder`] and
//! [`PlaceLookup`] traits by blocking on asynchronous `reqwest` calls.
//!
//! # Example
//!
//! ```no_run
//! use colony_core::{PlaceLookup, Waypoint};
//! use colony_data::locationiq::{LocationIqClient, LocationIqConfig};
//!
//! let client = LocationIqClient::with_config(LocationIqConfig::new("pk.example"))?;
//! let places = client.nearby(Waypoint::new(13.0827, 80.2707), 10_000)?;
//! for place in places {
//!     println!("{} at {:?}", place.name, place.location);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`Geocoder`]: colony_core::Geocoder
//! [`PlaceLookup`]: colony_core::PlaceLookup

mod client;
mod response;

pub use client::{
    ClientBuildError, DEFAULT_BASE_URL, DEFAULT_PLACE_TAG, DEFAULT_RESULT_LIMIT,
    DEFAULT_USER_AGENT, LocationIqClient, LocationIqConfig,
};
