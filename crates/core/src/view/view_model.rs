use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display-ready row for one holding.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingView {
    pub symbol: Option<String>,
    pub net_quantity_label: Option<String>,
    pub net_quantity_value: Option<String>,
    pub ltp_label: Option<String>,
    pub ltp_value: Option<String>,
    pub pnl_label: Option<String>,
    pub pnl_value: Option<String>,
    /// `None` when the P&L is unknown.
    pub is_pnl_positive: Option<bool>,
}

/// Display-ready expandable summary.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummaryView {
    pub profit_loss_label: Option<String>,
    pub profit_loss_value: Option<String>,
    /// e.g. `" (1.31%)"`
    pub profit_loss_percentage: Option<String>,
    pub is_profit_loss_positive: Option<bool>,

    pub current_value_label: Option<String>,
    pub current_value_value: Option<String>,

    pub total_investment_label: Option<String>,
    pub total_investment_value: Option<String>,

    pub todays_pnl_label: Option<String>,
    pub todays_pnl_value: Option<String>,
    pub is_todays_pnl_positive: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub holdings: Option<Vec<HoldingView>>,
    pub summary: Option<PortfolioSummaryView>,
    pub as_of: DateTime<Utc>,
}

/// Load status of the portfolio screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PortfolioViewState {
    Loading,
    Success(PortfolioView),
    Error {
        message: String,
        /// Set when a reload may succeed as is (timeouts, 5xx).
        retryable: bool,
    },
}

impl PortfolioViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PortfolioViewState::Loading)
    }
}
