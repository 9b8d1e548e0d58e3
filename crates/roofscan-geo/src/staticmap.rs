//! Satellite tile fetching from a static-map provider.
//!
//! Tiles are requested centered on a coordinate at a fixed 640x640 pixel
//! size, maptype `satellite`. The provider returns encoded PNG bytes,
//! which are handed to the vision pipeline untouched.

use tracing::debug;

use crate::{GeoError, Result};

/// Default base URL of the static-map provider.
pub const DEFAULT_STATIC_MAP_BASE_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Edge length in pixels of requested tiles.
pub const TILE_SIZE_PX: u32 = 640;

/// Default zoom level for rooftop imagery (roughly 0.1 m/px at mid latitudes).
pub const DEFAULT_ZOOM: u8 = 20;

/// Client for fetching satellite tiles.
///
/// Cloning is cheap; the underlying HTTP connection pool is shared.
#[derive(Clone)]
pub struct StaticMapClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for StaticMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticMapClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StaticMapClient {
    /// Create a client against the default provider URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_STATIC_MAP_BASE_URL, api_key)
    }

    /// Create a client against a custom provider URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the tile request URL for a coordinate and zoom level.
    pub fn tile_url(&self, lat: f64, lon: f64, zoom: u8) -> String {
        format!(
            "{}?center={},{}&zoom={}&size={size}x{size}&maptype=satellite&key={}",
            self.base_url,
            lat,
            lon,
            zoom,
            self.api_key,
            size = TILE_SIZE_PX
        )
    }

    /// Fetch the satellite tile centered on a coordinate.
    ///
    /// Returns the raw encoded image bytes exactly as served by the provider.
    pub async fn fetch_tile(&self, lat: f64, lon: f64, zoom: u8) -> Result<Vec<u8>> {
        debug!(lat, lon, zoom, "fetching satellite tile");

        let response = self.client.get(self.tile_url(lat, lon, zoom)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::TileFetchFailed {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
