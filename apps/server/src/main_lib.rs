use std::sync::Arc;

use crate::config::Config;
use folioview_core::{
    portfolio::{
        holdings::{HoldingsService, HoldingsServiceTrait},
        summary::{HoldingSummaryCalculator, PortfolioSummaryCalculator},
        PortfolioService, PortfolioServiceTrait, PortfolioStateHolder,
    },
    view::PortfolioViewMapper,
};
use folioview_holdings_api::{HoldingsApiConfig, HoldingsProvider, HttpHoldingsProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    pub portfolio_state: Arc<PortfolioStateHolder>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let api_config = HoldingsApiConfig::new(config.holdings_url.clone())
        .with_connect_timeout(config.connect_timeout)
        .with_request_timeout(config.request_timeout);
    let provider = HttpHoldingsProvider::new(&api_config)?;
    tracing::info!("Holdings endpoint in use: {}", provider.url());
    let provider: Arc<dyn HoldingsProvider> = Arc::new(provider);

    let holdings_service: Arc<dyn HoldingsServiceTrait> =
        Arc::new(HoldingsService::new(provider));
    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        holdings_service,
        Arc::new(HoldingSummaryCalculator::new()),
        Arc::new(PortfolioSummaryCalculator::new()),
        PortfolioViewMapper::new(config.currency_symbol.clone()),
    ));
    let portfolio_state = Arc::new(PortfolioStateHolder::new(portfolio_service.clone()));

    Ok(Arc::new(AppState {
        portfolio_service,
        portfolio_state,
    }))
}
