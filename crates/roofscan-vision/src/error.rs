//! Error types for vision operations.

use thiserror::Error;

/// Errors that can occur during roof contour extraction.
#[derive(Debug, Error)]
pub enum VisionError {
    /// Input bytes are not a decodable raster image.
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),
}
