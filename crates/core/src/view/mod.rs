//! Presentation layer: display strings and screen state.

pub mod format;
pub mod view_mapper;
pub mod view_model;

pub use format::{format_currency, format_percentage};
pub use view_mapper::PortfolioViewMapper;
pub use view_model::{HoldingView, PortfolioSummaryView, PortfolioView, PortfolioViewState};
