use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use folioview_core::{portfolio::summary::Portfolio, view::PortfolioViewState};

/// Latest published state; does not trigger a fetch.
async fn get_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioViewState> {
    Json(state.portfolio_state.current())
}

async fn refresh_portfolio(State(state): State<Arc<AppState>>) -> Json<PortfolioViewState> {
    Json(state.portfolio_state.load().await)
}

/// Unformatted numbers, computed on demand.
async fn get_portfolio_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.get_portfolio_summary().await?;
    Ok(Json(portfolio))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/refresh", post(refresh_portfolio))
        .route("/portfolio/summary", get(get_portfolio_summary))
}
