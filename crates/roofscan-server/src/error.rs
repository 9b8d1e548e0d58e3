//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::geocode::GeocodeError;

/// Errors surfaced by the HTTP handlers.
///
/// Every variant renders as a `{"detail": ...}` JSON body with a matching
/// status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Geocoding endpoint hit without a configured key.
    #[error("Geocoding API key not configured")]
    GeocodingKeyMissing,

    /// Imagery endpoint hit without a configured key.
    #[error("Static map API key not configured")]
    StaticMapKeyMissing,

    /// Upstream geocoding failure.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// Satellite tile fetch failure.
    #[error(transparent)]
    Tile(#[from] roofscan_geo::GeoError),

    /// Contour extraction failure on fetched tile bytes.
    #[error(transparent)]
    Vision(#[from] roofscan_vision::VisionError),

    /// Climatology fetch or validation failure.
    #[error(transparent)]
    Climate(#[from] roofscan_climate::ClimateError),

    /// Unexpected internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Geocode(GeocodeError::Status { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_geocode_query_is_bad_request() {
        let err = ApiError::Geocode(GeocodeError::Status {
            status: "ZERO_RESULTS".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "geocoding failed: ZERO_RESULTS");
    }

    #[test]
    fn test_missing_keys_are_server_errors() {
        assert_eq!(
            ApiError::GeocodingKeyMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::StaticMapKeyMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
