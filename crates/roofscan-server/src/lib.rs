//! # roofscan-server
//!
//! HTTP orchestration for roof area estimation and climate yield reports.
//!
//! The server exposes a small JSON API over the pipeline crates: geocode
//! an address, fetch the satellite tile for the coordinate, measure the
//! roof in the tile, then estimate solar and rainwater yields for the
//! measured area. Errors come back as a `{"detail": ...}` body with a
//! matching HTTP status.

pub mod config;
pub mod error;
pub mod geocode;
pub mod routes;

pub use config::ServerConfig;
pub use error::ApiError;
pub use geocode::{GeocodeClient, GeocodeError, GeocodedAddress};
pub use routes::{create_router, AppState};
