//! Holdings provider abstractions and implementations.
//!
//! This module contains:
//! - The `HoldingsProvider` trait that all sources implement
//! - `HoldingsApiConfig`, the endpoint and timeout settings
//! - The `reqwest`-based HTTP provider

mod config;
mod traits;

pub mod http;

pub use config::{
    HoldingsApiConfig, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use http::HttpHoldingsProvider;
pub use traits::HoldingsProvider;
