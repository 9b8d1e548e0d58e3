//! # roofscan-geo
//!
//! Web Mercator ground resolution and real-world area calibration for
//! satellite map tiles, plus the static-map client that fetches them.
//!
//! A rooftop detected in a tile is measured in pixels. Converting that
//! measurement to square meters requires the tile's ground resolution,
//! which depends on the latitude of the tile center and the zoom level
//! it was rendered at. This crate provides:
//!
//! - [`meters_per_pixel`] to compute the ground resolution
//! - [`to_real_area`] to calibrate a pixel area into m² and ft²
//! - [`StaticMapClient`] to fetch the satellite tile for a coordinate
//!
//! ## Example
//!
//! ```
//! use roofscan_geo::{meters_per_pixel, to_real_area};
//!
//! let scale = meters_per_pixel(47.6062, 20);
//! let area = to_real_area(12_000.0, scale);
//! assert!(area.m2 > 0.0);
//! assert!(area.ft2 > area.m2);
//! ```

mod area;
mod error;
mod scale;
mod staticmap;

pub use area::{to_real_area, RealArea, SQUARE_FEET_PER_SQUARE_METER};
pub use error::GeoError;
pub use scale::{meters_per_pixel, EQUATOR_METERS_PER_PIXEL};
pub use staticmap::{StaticMapClient, DEFAULT_STATIC_MAP_BASE_URL, DEFAULT_ZOOM, TILE_SIZE_PX};

/// Result type for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;
