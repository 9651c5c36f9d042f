//! Test helpers for writing request files and stubbing lookups.

use camino::{Utf8Path, Utf8PathBuf};
use colony_core::test_support::{MemoryGeocoder, MemoryPlaceLookup};
use colony_core::{Geocoder, LookupError, Place, PlaceLookup, Waypoint};
use tempfile::TempDir;

use crate::CliError;
use crate::deliver::{DeliverConfig, DeliveryLookup, DeliveryLookupBuilder};

/// Delivery location used across deliver tests (Chennai Central).
pub(super) const DELIVERY_POINT: Waypoint = Waypoint::new(13.0827, 80.2707);

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn square_request_json(seed: Option<u64>) -> String {
    let seed = seed.map_or_else(|| "null".to_owned(), |value| value.to_string());
    format!(
        r#"{{
  "waypoints": [
    {{ "lat": 0.0, "lon": 0.0 }},
    {{ "lat": 1.0, "lon": 1.0 }},
    {{ "lat": 0.0, "lon": 1.0 }},
    {{ "lat": 1.0, "lon": 0.0 }}
  ],
  "seed": {seed}
}}"#
    )
}

pub(super) fn restaurants() -> Vec<Place> {
    vec![
        Place::new("Dosa Corner", Waypoint::new(13.0900, 80.2750)),
        Place::new("Biryani House", Waypoint::new(13.0700, 80.2600)),
    ]
}

/// Lookup pairing an in-memory geocoder with an in-memory place index.
pub(super) struct StubLookup {
    geocoder: MemoryGeocoder,
    places: MemoryPlaceLookup,
}

impl Geocoder for StubLookup {
    fn geocode(&self, address: &str) -> Result<Option<Waypoint>, LookupError> {
        self.geocoder.geocode(address)
    }
}

impl PlaceLookup for StubLookup {
    fn nearby(&self, centre: Waypoint, radius_m: u32) -> Result<Vec<Place>, LookupError> {
        self.places.nearby(centre, radius_m)
    }
}

/// Builder handing out [`StubLookup`] instances over fixed data.
#[derive(Clone)]
pub(super) struct StubLookupBuilder {
    pub(super) addresses: Vec<(String, Waypoint)>,
    pub(super) places: Vec<Place>,
}

impl StubLookupBuilder {
    pub(super) fn with_restaurants() -> Self {
        Self {
            addresses: vec![("Chennai Central".to_owned(), DELIVERY_POINT)],
            places: restaurants(),
        }
    }
}

impl DeliveryLookupBuilder for StubLookupBuilder {
    fn build(&self, _config: &DeliverConfig) -> Result<Box<dyn DeliveryLookup>, CliError> {
        Ok(Box::new(StubLookup {
            geocoder: MemoryGeocoder::with_addresses(self.addresses.clone()),
            places: MemoryPlaceLookup::with_places(self.places.clone()),
        }))
    }
}
