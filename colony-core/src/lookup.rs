//! Location lookups consumed by route planning.
//!
//! The [`Geocoder`] trait resolves free-form addresses to waypoints and the
//! [`PlaceLookup`] trait discovers named places around a waypoint. Both are
//! synchronous so the core stays embeddable in synchronous contexts; network
//! backed implementations bridge to async internally.

use thiserror::Error;

use crate::Waypoint;

/// A named place returned by a [`PlaceLookup`].
///
/// # Examples
/// ```
/// use colony_core::{Place, Waypoint};
///
/// let place = Place::new("Saravana Bhavan", Waypoint::new(13.05, 80.25));
/// assert_eq!(place.name, "Saravana Bhavan");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Human-readable name.
    pub name: String,
    /// Position of the place.
    pub location: Waypoint,
}

impl Place {
    /// Construct a place from a name and a location.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Waypoint) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

/// Errors from [`Geocoder::geocode`] and [`PlaceLookup::nearby`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup service needs an API key but none was configured.
    #[error("an API key is required for {service}")]
    MissingApiKey {
        /// Name of the service.
        service: &'static str,
    },
    /// The request exceeded its timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// URL that was requested, with credentials redacted.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with an unsuccessful HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// URL that was requested, with credentials redacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request could not be delivered.
    #[error("network error requesting {url}: {message}")]
    Network {
        /// URL that was requested, with credentials redacted.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse lookup response: {message}")]
    Parse {
        /// Error detail.
        message: String,
    },
}

/// Resolve addresses to waypoints.
///
/// # Examples
///
/// ```
/// use colony_core::{Geocoder, LookupError, Waypoint};
///
/// struct FixedGeocoder;
///
/// impl Geocoder for FixedGeocoder {
///     fn geocode(&self, address: &str) -> Result<Option<Waypoint>, LookupError> {
///         Ok((address == "depot").then_some(Waypoint::new(1.0, 2.0)))
///     }
/// }
///
/// assert_eq!(FixedGeocoder.geocode("depot")?, Some(Waypoint::new(1.0, 2.0)));
/// assert_eq!(FixedGeocoder.geocode("elsewhere")?, None);
/// # Ok::<(), LookupError>(())
/// ```
pub trait Geocoder {
    /// Return the waypoint for `address`, or `None` when it is unknown.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the lookup itself fails.
    fn geocode(&self, address: &str) -> Result<Option<Waypoint>, LookupError>;
}

/// Discover named places near a waypoint.
pub trait PlaceLookup {
    /// Return places within `radius_m` metres of `centre`, nearest first
    /// where the backend reports distances.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the lookup itself fails. An area with
    /// no places is not an error.
    fn nearby(&self, centre: Waypoint, radius_m: u32) -> Result<Vec<Place>, LookupError>;
}
