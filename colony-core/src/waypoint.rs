//! Geographic waypoints.
//!
//! A [`Waypoint`] is a latitude/longitude pair in decimal degrees. Conversions
//! to and from [`geo::Coord`] follow the WGS84 convention used by `geo`:
//! `x = longitude`, `y = latitude`.

use geo::{Coord, Point};

/// A point a route passes through.
///
/// Waypoints are plain values: they are never validated, so out-of-range
/// degrees are carried through unchanged.
///
/// # Examples
/// ```
/// use colony_core::Waypoint;
///
/// let depot = Waypoint::new(12.9716, 80.2750);
/// assert_eq!(depot.lat, 12.9716);
/// assert_eq!(depot.coord().x, 80.2750);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

impl Waypoint {
    /// Construct a waypoint from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Return the waypoint as a `geo` coordinate.
    #[must_use]
    pub const fn coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

impl From<Coord<f64>> for Waypoint {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Point<f64>> for Waypoint {
    fn from(point: Point<f64>) -> Self {
        Self::from(point.0)
    }
}

impl From<Waypoint> for Coord<f64> {
    fn from(waypoint: Waypoint) -> Self {
        waypoint.coord()
    }
}

impl From<Waypoint> for Point<f64> {
    fn from(waypoint: Waypoint) -> Self {
        Self(waypoint.coord())
    }
}
