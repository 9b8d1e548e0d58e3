//! Runtime configuration from the environment.

use anyhow::Context;

use roofscan_climate::DEFAULT_POWER_BASE_URL;

/// Default runoff coefficient when `RUNOFF_COEFF` is unset.
const DEFAULT_RUNOFF_COEFF: f64 = 0.9;

/// Configuration read once at process start.
///
/// API keys are optional. Endpoints that depend on an absent key fail
/// per-request with a configuration error rather than preventing startup,
/// which keeps the climate endpoints usable without any keys at all.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the NASA POWER API (`POWER_BASE`).
    pub power_base: String,
    /// Rainfall collection fraction (`RUNOFF_COEFF`).
    pub runoff_coeff: f64,
    /// Static-map provider API key (`STATIC_MAP_KEY`).
    pub static_map_key: Option<String>,
    /// Geocoding provider API key (`GEOCODING_KEY`).
    pub geocoding_key: Option<String>,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// Unset variables fall back to their defaults; a set variable that
    /// fails to parse is a startup error.
    pub fn from_env() -> anyhow::Result<Self> {
        let power_base =
            std::env::var("POWER_BASE").unwrap_or_else(|_| DEFAULT_POWER_BASE_URL.to_string());

        let runoff_coeff = match std::env::var("RUNOFF_COEFF") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("RUNOFF_COEFF is not a number: {:?}", raw))?,
            Err(_) => DEFAULT_RUNOFF_COEFF,
        };

        Ok(Self {
            power_base,
            runoff_coeff,
            static_map_key: std::env::var("STATIC_MAP_KEY").ok(),
            geocoding_key: std::env::var("GEOCODING_KEY").ok(),
        })
    }
}
