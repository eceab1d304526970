//! HTTP holdings provider.
//!
//! Issues a single GET against the configured endpoint and decodes the
//! `{ data: { userHolding: [...] } }` envelope.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::errors::HoldingsApiError;
use crate::models::PortfolioResponse;
use crate::provider::{HoldingsApiConfig, HoldingsProvider};

const PROVIDER_ID: &str = "HTTP";

/// `reqwest`-backed holdings provider.
pub struct HttpHoldingsProvider {
    client: Client,
    url: Url,
}

impl HttpHoldingsProvider {
    /// Build a provider for the given endpoint.
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &HoldingsApiConfig) -> Result<Self, HoldingsApiError> {
        let url = Url::parse(&config.url).map_err(|e| {
            HoldingsApiError::InvalidConfiguration(format!("'{}': {}", config.url, e))
        })?;

        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| HoldingsApiError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl HoldingsProvider for HttpHoldingsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_holdings(&self) -> Result<PortfolioResponse, HoldingsApiError> {
        debug!("Holdings request: GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HoldingsApiError::Timeout {
                        url: self.url.to_string(),
                    }
                } else {
                    HoldingsApiError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Holdings endpoint returned HTTP {}", status.as_u16());
            return Err(HoldingsApiError::HttpStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string()),
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                HoldingsApiError::Timeout {
                    url: self.url.to_string(),
                }
            } else {
                HoldingsApiError::Network(e)
            }
        })?;

        let parsed: PortfolioResponse = serde_json::from_str(&text).map_err(|e| {
            warn!("Holdings response could not be decoded: {}", e);
            HoldingsApiError::Decode(e.to_string())
        })?;

        debug!(
            "Holdings response decoded with {} records",
            parsed.user_holding().map(|records| records.len()).unwrap_or(0)
        );

        Ok(parsed)
    }
}
