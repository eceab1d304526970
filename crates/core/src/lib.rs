//! Folioview Core - Portfolio domain, P&L engine and presentation mapping.
//!
//! This crate turns the holdings served by `folioview-holdings-api` into
//! computed portfolio summaries and display-ready views. The calculation
//! engine is pure; fetching sits behind the `HoldingsProvider` trait.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;
pub mod view;

// Re-export common types from portfolio and view modules
pub use portfolio::*;
pub use view::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
