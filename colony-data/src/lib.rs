//! Network-backed lookups for colony route planning.
//!
//! The [`locationiq`] module implements the [`Geocoder`] and [`PlaceLookup`]
//! traits from `colony-core` against the LocationIQ HTTP API.
//!
//! [`Geocoder`]: colony_core::Geocoder
//! [`PlaceLookup`]: colony_core::PlaceLookup

#![forbid(unsafe_code)]

pub mod locationiq;

pub use locationiq::{ClientBuildError, LocationIqClient, LocationIqConfig};
