use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::portfolio::portfolio_service::PortfolioServiceTrait;
use crate::view::PortfolioViewState;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Holds the latest [`PortfolioViewState`] and broadcasts every change.
///
/// Starts in `Loading`. Subscribers always see the most recent state; a slow
/// reader may skip intermediate ones. Loads run one at a time in call order,
/// so a stale fetch never overwrites a newer result.
pub struct PortfolioStateHolder {
    service: Arc<dyn PortfolioServiceTrait>,
    sender: watch::Sender<PortfolioViewState>,
    load_lock: Mutex<()>,
}

impl PortfolioStateHolder {
    pub fn new(service: Arc<dyn PortfolioServiceTrait>) -> Self {
        let (sender, _) = watch::channel(PortfolioViewState::Loading);
        Self {
            service,
            sender,
            load_lock: Mutex::new(()),
        }
    }

    /// Publishes `Loading`, fetches the portfolio and publishes the outcome.
    pub async fn load(&self) -> PortfolioViewState {
        let _guard = self.load_lock.lock().await;
        self.sender.send_replace(PortfolioViewState::Loading);

        let state = match self.service.get_portfolio().await {
            Ok(view) => {
                info!(
                    "Portfolio loaded with {} holdings",
                    view.holdings.as_ref().map_or(0, Vec::len)
                );
                PortfolioViewState::Success(view)
            }
            Err(e) => {
                error!("Failed to load portfolio: {}", e);
                PortfolioViewState::Error {
                    message: message_or_fallback(e.to_string()),
                    retryable: e.is_retryable(),
                }
            }
        };

        self.sender.send_replace(state.clone());
        state
    }

    pub fn subscribe(&self) -> watch::Receiver<PortfolioViewState> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> PortfolioViewState {
        self.sender.borrow().clone()
    }
}

fn message_or_fallback(message: String) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}
