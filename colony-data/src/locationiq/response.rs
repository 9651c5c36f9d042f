//! Response bodies returned by the LocationIQ search and nearby endpoints.
//!
//! Coordinates arrive as decimal strings.

use colony_core::{LookupError, Place, Waypoint};
use serde::Deserialize;

/// One entry of a `search.php` or `nearby.php` response array.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocationResult {
    pub(crate) lat: String,
    pub(crate) lon: String,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) display_name: Option<String>,
}

impl LocationResult {
    pub(crate) fn waypoint(&self) -> Result<Waypoint, LookupError> {
        Ok(Waypoint::new(
            parse_coordinate("lat", &self.lat)?,
            parse_coordinate("lon", &self.lon)?,
        ))
    }

    pub(crate) fn into_place(self) -> Result<Place, LookupError> {
        let location = self.waypoint()?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .or(self.display_name)
            .unwrap_or_else(|| "unnamed".to_owned());
        Ok(Place::new(name, location))
    }
}

fn parse_coordinate(field: &str, value: &str) -> Result<f64, LookupError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| LookupError::Parse {
            message: format!("invalid {field} value {value:?}"),
        })
}
