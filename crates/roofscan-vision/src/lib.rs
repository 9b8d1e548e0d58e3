//! # roofscan-vision
//!
//! Roof contour extraction from satellite imagery.
//!
//! The pipeline turns encoded tile bytes into the single dominant rooftop
//! outline: grayscale conversion, Gaussian smoothing, Canny edge detection,
//! outer-boundary tracing, then a convex hull over the largest boundary.
//! The hull area in pixels² is the raw measurement that the geo crate
//! calibrates into square meters.
//!
//! ## Example
//!
//! ```no_run
//! use roofscan_vision::{extract_roof_contour, RoofDetection};
//!
//! # fn run(tile_bytes: &[u8]) -> roofscan_vision::Result<()> {
//! match extract_roof_contour(tile_bytes)? {
//!     RoofDetection::Detected(roof) => {
//!         println!("{} px² across {} vertices", roof.area_px, roof.polygon.len());
//!     }
//!     RoofDetection::NotDetected => println!("no distinct roof outline"),
//! }
//! # Ok(())
//! # }
//! ```

mod contour;
mod error;

pub use contour::{
    extract_roof_contour, PixelPoint, RoofContour, RoofDetection, CANNY_HIGH_THRESHOLD,
    CANNY_LOW_THRESHOLD, GAUSSIAN_BLUR_SIGMA,
};
pub use error::VisionError;

/// Result type for vision operations.
pub type Result<T> = std::result::Result<T, VisionError>;
