//! Error types for climate operations.

use thiserror::Error;

/// Errors that can occur when fetching or validating climatology data.
#[derive(Debug, Error)]
pub enum ClimateError {
    /// HTTP transport error while talking to the POWER API.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The POWER API answered with a non-success status.
    #[error("POWER API error: HTTP {status}: {body}")]
    PowerStatus {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, which usually carries the API's error message.
        body: String,
    },

    /// The response lacks a requested climate variable entirely.
    #[error("climatology response has no {variable} values")]
    MissingVariable {
        /// POWER parameter name, e.g. `ALLSKY_SFC_SW_DWN`.
        variable: String,
    },

    /// The response lacks one of the twelve monthly values for a variable.
    #[error("climatology response for {variable} is missing month {month}")]
    MissingMonth {
        /// POWER parameter name the month was missing under.
        variable: String,
        /// Month abbreviation that was absent, e.g. `JUL`.
        month: &'static str,
    },
}
