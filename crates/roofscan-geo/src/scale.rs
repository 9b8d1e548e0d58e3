//! Web Mercator ground resolution.

/// Ground resolution at the equator of a zoom 0 Web Mercator tile, in
/// meters per pixel (Earth's equatorial circumference over 256 pixels).
pub const EQUATOR_METERS_PER_PIXEL: f64 = 156_543.033_92;

/// Ground resolution in meters per pixel at a latitude and zoom level.
///
/// Each zoom increment halves the resolution. The cosine factor accounts
/// for meridian convergence away from the equator; at the poles it reaches
/// zero, so any area calibrated there degenerates to zero as well.
///
/// # Arguments
/// * `latitude_deg` - Latitude of the tile center in decimal degrees
/// * `zoom` - Map zoom level (rooftop imagery is typically zoom 20)
pub fn meters_per_pixel(latitude_deg: f64, zoom: u8) -> f64 {
    EQUATOR_METERS_PER_PIXEL * latitude_deg.to_radians().cos() / 2f64.powi(i32::from(zoom))
}
