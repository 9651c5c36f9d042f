//! In-memory lookup implementations used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{Geocoder, LookupError, Place, PlaceLookup, Waypoint, haversine_km};

/// In-memory [`Geocoder`] keyed by exact address text.
#[derive(Default, Debug, Clone)]
pub struct MemoryGeocoder {
    addresses: HashMap<String, Waypoint>,
}

impl MemoryGeocoder {
    /// Create a geocoder that knows the given addresses.
    pub fn with_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = (S, Waypoint)>,
        S: Into<String>,
    {
        Self {
            addresses: addresses
                .into_iter()
                .map(|(address, waypoint)| (address.into(), waypoint))
                .collect(),
        }
    }
}

impl Geocoder for MemoryGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<Waypoint>, LookupError> {
        Ok(self.addresses.get(address).copied())
    }
}

/// In-memory [`PlaceLookup`] performing a linear radius scan.
///
/// Results are ordered nearest first.
#[derive(Default, Debug, Clone)]
pub struct MemoryPlaceLookup {
    places: Vec<Place>,
}

impl MemoryPlaceLookup {
    /// Create a lookup from a collection of places.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceLookup for MemoryPlaceLookup {
    #[expect(
        clippy::float_arithmetic,
        reason = "radius comparison converts metres to kilometres"
    )]
    fn nearby(&self, centre: Waypoint, radius_m: u32) -> Result<Vec<Place>, LookupError> {
        let radius_km = f64::from(radius_m) / 1000.0;
        let mut found: Vec<(f64, Place)> = self
            .places
            .iter()
            .map(|place| (haversine_km(centre, place.location), place.clone()))
            .filter(|(distance, _)| *distance <= radius_km)
            .collect();
        found.sort_by(|(lhs, _), (rhs, _)| lhs.total_cmp(rhs));
        Ok(found.into_iter().map(|(_, place)| place).collect())
    }
}

/// Lookup that fails every request with a fixed error.
#[derive(Debug, Clone)]
pub struct FailingLookup {
    error: LookupError,
}

impl FailingLookup {
    /// Create a lookup that always returns `error`.
    #[must_use]
    pub const fn new(error: LookupError) -> Self {
        Self { error }
    }
}

impl Geocoder for FailingLookup {
    fn geocode(&self, _address: &str) -> Result<Option<Waypoint>, LookupError> {
        Err(self.error.clone())
    }
}

impl PlaceLookup for FailingLookup {
    fn nearby(&self, _centre: Waypoint, _radius_m: u32) -> Result<Vec<Place>, LookupError> {
        Err(self.error.clone())
    }
}
