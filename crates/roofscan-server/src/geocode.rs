//! Address geocoding through the Google Geocoding API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base URL of the geocoding provider.
pub const DEFAULT_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Errors that can occur when geocoding an address.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP transport error while talking to the provider.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the query.
    #[error("geocoding failed: {status}")]
    Status {
        /// Provider status string, e.g. `ZERO_RESULTS` or `REQUEST_DENIED`.
        status: String,
    },

    /// The provider reported success but returned no matches.
    #[error("geocoding returned no results")]
    NoResults,
}

/// A successfully geocoded address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedAddress {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Canonical address as formatted by the provider.
    pub formatted_address: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Client for resolving street addresses to coordinates.
#[derive(Clone)]
pub struct GeocodeClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for GeocodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodeClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeocodeClient {
    /// Create a client against the default provider URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_GEOCODE_BASE_URL, api_key)
    }

    /// Create a client against a custom provider URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Resolve an address to coordinates, taking the provider's best match.
    pub async fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let parsed: GeocodeResponse = response.json().await?;
        if parsed.status != "OK" {
            return Err(GeocodeError::Status {
                status: parsed.status,
            });
        }

        let best = parsed
            .results
            .into_iter()
            .next()
            .ok_or(GeocodeError::NoResults)?;

        Ok(GeocodedAddress {
            lat: best.geometry.location.lat,
            lon: best.geometry.location.lng,
            formatted_address: best.formatted_address,
        })
    }
}
