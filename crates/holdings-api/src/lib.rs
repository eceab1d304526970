//! Folioview Holdings API Crate
//!
//! This crate fetches a user's holdings from the remote portfolio endpoint.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +-------------------+
//! | HoldingsProvider | --> |   GET endpoint   | --> | PortfolioResponse |
//! +------------------+     +------------------+     +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`HoldingsProvider`] - Source of holdings (HTTP in production, mocks in tests)
//! - [`HttpHoldingsProvider`] - `reqwest` implementation of the provider
//! - [`PortfolioResponse`] - Wire shape `{ data: { userHolding: [...] } }`
//! - [`HoldingsApiError`] - Fetch failures, classified by [`RetryClass`]

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{HoldingsApiError, RetryClass};
pub use models::{HoldingRecord, PortfolioData, PortfolioResponse};
pub use provider::{HoldingsApiConfig, HoldingsProvider, HttpHoldingsProvider};
