use crate::errors::{Error, Result};
use crate::portfolio::holdings::{HoldingSummary, HoldingsServiceTrait};
use crate::portfolio::summary::{
    HoldingSummaryCalculatorTrait, Portfolio, PortfolioSummaryCalculatorTrait,
};
use crate::view::{PortfolioView, PortfolioViewMapper};
use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;

#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Fetches holdings and returns the computed, unformatted portfolio.
    async fn get_portfolio_summary(&self) -> Result<Portfolio>;

    /// Same as [`get_portfolio_summary`](Self::get_portfolio_summary), mapped for display.
    async fn get_portfolio(&self) -> Result<PortfolioView>;
}

pub struct PortfolioService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    holding_calculator: Arc<dyn HoldingSummaryCalculatorTrait>,
    portfolio_calculator: Arc<dyn PortfolioSummaryCalculatorTrait>,
    view_mapper: PortfolioViewMapper,
}

impl PortfolioService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        holding_calculator: Arc<dyn HoldingSummaryCalculatorTrait>,
        portfolio_calculator: Arc<dyn PortfolioSummaryCalculatorTrait>,
        view_mapper: PortfolioViewMapper,
    ) -> Self {
        Self {
            holdings_service,
            holding_calculator,
            portfolio_calculator,
            view_mapper,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio_summary(&self) -> Result<Portfolio> {
        let holdings = self.holdings_service.get_holdings().await?;

        let summaries: Vec<HoldingSummary> = holdings
            .iter()
            .filter_map(|holding| self.holding_calculator.calculate(Some(holding)))
            .collect();
        let summary = self.portfolio_calculator.calculate(Some(summaries.as_slice()));

        debug!(
            "Computed portfolio from {} holdings ({} summaries)",
            holdings.len(),
            summaries.len()
        );

        Ok(Portfolio {
            holdings: (!summaries.is_empty()).then_some(summaries),
            summary,
            as_of: Utc::now(),
        })
    }

    async fn get_portfolio(&self) -> Result<PortfolioView> {
        let portfolio = self.get_portfolio_summary().await?;
        self.view_mapper
            .map_to_view(Some(&portfolio))
            .ok_or_else(|| Error::Mapping("portfolio view is empty".to_string()))
    }
}
