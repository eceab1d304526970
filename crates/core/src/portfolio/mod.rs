//! Portfolio module.
//!
//! ```text
//! HoldingsProvider → HoldingsService → HoldingSummaryCalculator
//!                                            ↓
//! PortfolioStateHolder ← PortfolioService ← PortfolioSummaryCalculator
//! ```
//!
//! - **Holdings** (`holdings/`) - Domain holdings and the upstream record mapper
//! - **Summary** (`summary/`) - Per-holding and aggregate P&L calculators
//! - **Service** (`portfolio_service.rs`) - Fetch, compute and map for display
//! - **State** (`portfolio_state.rs`) - Latest view state over a watch channel

pub mod holdings;
pub mod portfolio_service;
pub mod portfolio_state;
pub mod summary;


pub use holdings::*;
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use portfolio_state::PortfolioStateHolder;
pub use summary::*;
