//! Holdings provider trait definition.

use async_trait::async_trait;

use crate::errors::HoldingsApiError;
use crate::models::PortfolioResponse;

/// Source of a user's holdings.
///
/// Implement this trait to plug in a new holdings backend. The core crate only
/// talks to this trait, so tests substitute an in-memory implementation.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use folioview_holdings_api::{HoldingsApiError, HoldingsProvider, PortfolioResponse};
///
/// struct FixtureProvider(PortfolioResponse);
///
/// #[async_trait]
/// impl HoldingsProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn fetch_holdings(&self) -> Result<PortfolioResponse, HoldingsApiError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    /// Identifier used in log lines, e.g. "HTTP".
    fn id(&self) -> &'static str;

    /// Fetch the current holdings snapshot.
    ///
    /// A successful call may still carry no holdings (`data` or `userHolding`
    /// absent); only transport, status and decode failures are errors.
    async fn fetch_holdings(&self) -> Result<PortfolioResponse, HoldingsApiError>;
}
