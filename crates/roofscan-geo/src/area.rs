//! Pixel-area calibration into real-world units.

/// Square feet per square meter.
pub const SQUARE_FEET_PER_SQUARE_METER: f64 = 10.7639;

/// A roof area calibrated to real-world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealArea {
    /// Area in square meters.
    pub m2: f64,
    /// Area in square feet.
    pub ft2: f64,
}

/// Convert a pixel area into real-world units at a given ground resolution.
///
/// One pixel covers `meters_per_pixel²` square meters, so the pixel count
/// scales by the square of the resolution.
pub fn to_real_area(area_px: f64, meters_per_pixel: f64) -> RealArea {
    let m2 = area_px * meters_per_pixel * meters_per_pixel;
    RealArea {
        m2,
        ft2: m2 * SQUARE_FEET_PER_SQUARE_METER,
    }
}
