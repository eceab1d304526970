//! Core error types for Folioview.
//!
//! The calculation engine itself never fails: missing inputs and zero
//! denominators surface as `None`. These errors cover the fetch and mapping
//! stages around it.

use folioview_holdings_api::{HoldingsApiError, RetryClass};
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    HoldingsApi(#[from] HoldingsApiError),

    #[error("Failed to map portfolio data: {0}")]
    Mapping(String),
}

impl Error {
    /// Whether reloading could succeed without any change on our side.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::HoldingsApi(e) => e.retry_class() == RetryClass::Transient,
            Error::Mapping(_) => false,
        }
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
