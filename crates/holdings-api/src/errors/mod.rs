//! Error types and retry classification for the holdings API crate.
//!
//! This module provides:
//! - [`HoldingsApiError`]: The error enum for all holdings fetch operations
//! - [`RetryClass`]: Classification for determining reload behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while fetching holdings.
#[derive(Error, Debug)]
pub enum HoldingsApiError {
    /// The request to the endpoint timed out.
    #[error("Request timed out: {url}")]
    Timeout {
        /// The endpoint that timed out
        url: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("Failed to fetch holdings: {reason}")]
    HttpStatus {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase, or the numeric code if unknown
        reason: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode holdings response: {0}")]
    Decode(String),

    /// The client is misconfigured (bad URL, client build failure).
    #[error("Invalid holdings API configuration: {0}")]
    InvalidConfiguration(String),

    /// A network error occurred while communicating with the endpoint.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HoldingsApiError {
    /// Returns the retry classification for this error.
    ///
    /// ```
    /// use folioview_holdings_api::errors::{HoldingsApiError, RetryClass};
    ///
    /// let error = HoldingsApiError::HttpStatus { status: 503, reason: "Service Unavailable".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::Transient);
    ///
    /// let error = HoldingsApiError::Decode("expected object".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Timeout { .. } | Self::Network(_) => RetryClass::Transient,

            // 408 and 429 are client-range statuses that still clear up on their own
            Self::HttpStatus { status, .. } => match *status {
                408 | 429 => RetryClass::Transient,
                s if s >= 500 => RetryClass::Transient,
                _ => RetryClass::Never,
            },

            Self::Decode(_) | Self::InvalidConfiguration(_) => RetryClass::Never,
        }
    }
}
