//! Holdings wire models
//!
//! - `holding` - Response envelope and per-holding record as served by the endpoint

mod holding;

pub use holding::{HoldingRecord, PortfolioData, PortfolioResponse};
