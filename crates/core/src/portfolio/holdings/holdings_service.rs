use crate::errors::Result;
use crate::portfolio::holdings::holdings_mapper::map_to_domain_list;
use crate::portfolio::holdings::holdings_model::Holding;
use async_trait::async_trait;
use folioview_holdings_api::HoldingsProvider;
use log::{debug, error};
use std::sync::Arc;

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    /// Fetches the user's holdings and maps them into domain values.
    ///
    /// A successful fetch with no usable records yields an empty list.
    async fn get_holdings(&self) -> Result<Vec<Holding>>;
}

pub struct HoldingsService {
    provider: Arc<dyn HoldingsProvider>,
}

impl HoldingsService {
    pub fn new(provider: Arc<dyn HoldingsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn get_holdings(&self) -> Result<Vec<Holding>> {
        let response = self.provider.fetch_holdings().await.map_err(|e| {
            error!(
                "Failed to fetch holdings from provider {}: {}",
                self.provider.id(),
                e
            );
            e
        })?;

        let holdings = map_to_domain_list(response.user_holding()).unwrap_or_default();
        debug!(
            "Fetched {} holdings from provider {}",
            holdings.len(),
            self.provider.id()
        );
        Ok(holdings)
    }
}
