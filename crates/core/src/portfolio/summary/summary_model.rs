use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::holdings::HoldingSummary;

/// Aggregate P&L across every holding summary of one fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub current_value: Option<Decimal>,
    pub total_investment: Option<Decimal>,
    pub total_pnl: Option<Decimal>,
    pub total_pnl_percentage: Option<Decimal>,
    pub todays_pnl: Option<Decimal>,
    /// Relative to the aggregate current value, not the investment.
    pub todays_pnl_percentage: Option<Decimal>,
}

/// Result of one fetch-and-calculate cycle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// `None` when no holding produced a summary.
    pub holdings: Option<Vec<HoldingSummary>>,
    pub summary: Option<PortfolioSummary>,
    pub as_of: DateTime<Utc>,
}
