//! Blocking LocationIQ client.

use std::future::Future;
use std::time::Duration;

use colony_core::{Geocoder, LookupError, Place, PlaceLookup, Waypoint};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::response::LocationResult;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://us1.locationiq.com";

/// Default user agent for LocationIQ requests.
pub const DEFAULT_USER_AGENT: &str = "colony-route/0.1";

/// Default `tag` filter for nearby searches.
pub const DEFAULT_PLACE_TAG: &str = "restaurant";

/// Default maximum number of nearby places returned.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SERVICE_NAME: &str = "LocationIQ";

/// Error type for [`LocationIqClient`] construction failures.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid LocationIQ base URL {url:?}: {source}")]
    BaseUrl {
        /// Base URL as configured.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`LocationIqClient`].
#[derive(Debug, Clone)]
pub struct LocationIqConfig {
    /// Base URL of the API, without the `/v1` path.
    pub base_url: String,
    /// Access token sent as the `key` query parameter.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// `tag` filter for nearby searches.
    pub place_tag: String,
    /// Maximum number of nearby places returned.
    pub result_limit: usize,
}

impl Default for LocationIqConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            place_tag: DEFAULT_PLACE_TAG.to_owned(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl LocationIqConfig {
    /// Create a configuration using `api_key` and default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `tag` filter for nearby searches.
    #[must_use]
    pub fn with_place_tag(mut self, place_tag: impl Into<String>) -> Self {
        self.place_tag = place_tag.into();
        self
    }

    /// Set the maximum number of nearby places returned.
    #[must_use]
    pub const fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }
}

/// LocationIQ client implementing [`Geocoder`] and [`PlaceLookup`].
///
/// The client owns a Tokio runtime that is reused across calls. When called
/// from inside a multi-threaded Tokio runtime it borrows that runtime through
/// [`tokio::task::block_in_place`]; otherwise it blocks on its own runtime.
/// A `current_thread` caller runtime falls back to the owned runtime and may
/// deadlock if the caller drives IO needed by the request.
pub struct LocationIqClient {
    client: Client,
    config: LocationIqConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for LocationIqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationIqClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.config.timeout)
            .field("place_tag", &self.config.place_tag)
            .field("result_limit", &self.config.result_limit)
            .finish_non_exhaustive()
    }
}

impl LocationIqClient {
    /// Create a client for `api_key` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(LocationIqConfig::new(api_key))
    }

    /// Create a client with explicit configuration.
    ///
    /// An empty API key is accepted here; lookups then fail with
    /// [`LookupError::MissingApiKey`].
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse, or if the HTTP client
    /// or Tokio runtime fails to build.
    pub fn with_config(config: LocationIqConfig) -> Result<Self, ClientBuildError> {
        Url::parse(&config.base_url).map_err(|source| ClientBuildError::BaseUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &LocationIqConfig {
        &self.config
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, LookupError> {
        let base = self.config.base_url.trim_end_matches('/');
        let query = std::iter::once(("key", self.config.api_key.clone()))
            .chain(params.iter().cloned())
            .chain(std::iter::once(("format", "json".to_owned())));
        Url::parse_with_params(&format!("{base}/v1/{path}"), query).map_err(|err| {
            LookupError::Parse {
                message: format!("invalid request URL: {err}"),
            }
        })
    }

    fn search_url(&self, address: &str) -> Result<Url, LookupError> {
        self.endpoint("search.php", &[("q", address.to_owned())])
    }

    fn nearby_url(&self, centre: Waypoint, radius_m: u32) -> Result<Url, LookupError> {
        self.endpoint(
            "nearby.php",
            &[
                ("lat", centre.lat.to_string()),
                ("lon", centre.lon.to_string()),
                ("tag", self.config.place_tag.clone()),
                ("radius", radius_m.to_string()),
            ],
        )
    }

    fn require_api_key(&self) -> Result<(), LookupError> {
        if self.config.api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey {
                service: SERVICE_NAME,
            });
        }
        Ok(())
    }

    /// Fetch a result array. LocationIQ answers 404 when nothing matched.
    async fn fetch_results(&self, url: Url) -> Result<Vec<LocationResult>, LookupError> {
        let display_url = redact_key(&url);
        log::debug!("requesting {display_url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &display_url))?;
        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("no results for {display_url}");
            return Ok(Vec::new());
        }
        let response = response
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &display_url))?;

        response
            .json::<Vec<LocationResult>>()
            .await
            .map_err(|err| LookupError::Parse {
                message: err.to_string(),
            })
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> LookupError {
        if error.is_timeout() {
            return LookupError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return LookupError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: self.redact_message(error),
            };
        }

        LookupError::Network {
            url: url.to_owned(),
            message: self.redact_message(error),
        }
    }

    /// `reqwest` errors embed the request URL, including the key.
    fn redact_message(&self, error: &reqwest::Error) -> String {
        let message = error.to_string();
        if self.config.api_key.is_empty() {
            return message;
        }
        message.replace(self.config.api_key.as_str(), "REDACTED")
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl Geocoder for LocationIqClient {
    fn geocode(&self, address: &str) -> Result<Option<Waypoint>, LookupError> {
        self.require_api_key()?;
        let url = self.search_url(address)?;
        let results = self.block_on(self.fetch_results(url))?;
        results.first().map(LocationResult::waypoint).transpose()
    }
}

impl PlaceLookup for LocationIqClient {
    fn nearby(&self, centre: Waypoint, radius_m: u32) -> Result<Vec<Place>, LookupError> {
        self.require_api_key()?;
        let url = self.nearby_url(centre, radius_m)?;
        let results = self.block_on(self.fetch_results(url))?;
        Ok(results
            .into_iter()
            .take(self.config.result_limit)
            .filter_map(|result| {
                result
                    .into_place()
                    .inspect_err(|err| log::warn!("skipping nearby result: {err}"))
                    .ok()
            })
            .collect())
    }
}

/// Render `url` with the `key` parameter masked.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let shown = if name == "key" {
                "REDACTED".to_owned()
            } else {
                value.into_owned()
            };
            (name.into_owned(), shown)
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
