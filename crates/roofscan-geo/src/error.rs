//! Error types for geo operations.

use thiserror::Error;

/// Errors that can occur when fetching satellite tiles.
#[derive(Debug, Error)]
pub enum GeoError {
    /// HTTP transport error while talking to the tile provider.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The tile provider answered with a non-success status.
    #[error("failed to fetch satellite tile: HTTP {status}: {body}")]
    TileFetchFailed {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Response body, which usually carries the provider's error message.
        body: String,
    },
}
