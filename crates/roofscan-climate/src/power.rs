//! NASA POWER climatology client.

use tracing::debug;

use crate::record::{ClimatologyRecord, PowerResponse, PRECIP_PARAM, SOLAR_PARAM};
use crate::{ClimateError, Result};

/// Default base URL of the NASA POWER API.
pub const DEFAULT_POWER_BASE_URL: &str = "https://power.larc.nasa.gov/api";

/// POWER community identifier for requests (sustainable buildings).
const POWER_COMMUNITY: &str = "SB";

/// Client for the POWER climatology endpoint.
///
/// Fetches long-term-average monthly climate values for a coordinate and
/// validates them into a [`ClimatologyRecord`]. Cloning is cheap; the
/// underlying HTTP connection pool is shared.
#[derive(Debug, Clone)]
pub struct PowerClient {
    base_url: String,
    client: reqwest::Client,
}

impl PowerClient {
    /// Create a client against the default POWER base URL.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_POWER_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build the climatology request URL for a coordinate.
    pub fn climatology_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/temporal/climatology/point?parameters={},{}&community={}&longitude={}&latitude={}&format=JSON",
            self.base_url, SOLAR_PARAM, PRECIP_PARAM, POWER_COMMUNITY, lon, lat
        )
    }

    /// Fetch and validate the climatology record for a coordinate.
    pub async fn fetch_climatology(&self, lat: f64, lon: f64) -> Result<ClimatologyRecord> {
        debug!(lat, lon, "fetching POWER climatology");

        let response = self.client.get(self.climatology_url(lat, lon)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClimateError::PowerStatus {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: PowerResponse = response.json().await?;
        ClimatologyRecord::from_power(&parsed)
    }
}

impl Default for PowerClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climatology_url() {
        let client = PowerClient::with_base_url("https://example.com/api");
        assert_eq!(
            client.climatology_url(34.05, -118.24),
            "https://example.com/api/temporal/climatology/point?parameters=ALLSKY_SFC_SW_DWN,PRECTOTCORR&community=SB&longitude=-118.24&latitude=34.05&format=JSON"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = PowerClient::with_base_url("https://example.com/api/");
        assert!(client
            .climatology_url(0.0, 0.0)
            .starts_with("https://example.com/api/temporal/"));
    }

    #[test]
    fn test_default_base_url() {
        let client = PowerClient::new();
        let url = client.climatology_url(-33.87, 151.21);
        assert!(url.starts_with(DEFAULT_POWER_BASE_URL));
        assert!(url.contains("longitude=151.21"));
        assert!(url.contains("latitude=-33.87"));
    }
}
