//! Holding and portfolio P&L calculations.
//!
//! Both calculators are pure: missing inputs and zero denominators produce
//! `None` fields instead of errors.

pub mod holding_summary_calculator;
pub mod portfolio_summary_calculator;
pub mod summary_model;

#[cfg(test)]
mod portfolio_summary_calculator_tests;

pub use holding_summary_calculator::{
    calculate_holding_summary, HoldingSummaryCalculator, HoldingSummaryCalculatorTrait,
};
pub use portfolio_summary_calculator::{
    calculate_portfolio_summary, PortfolioSummaryCalculator, PortfolioSummaryCalculatorTrait,
};
pub use summary_model::{Portfolio, PortfolioSummary};
