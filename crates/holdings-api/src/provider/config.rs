use std::time::Duration;

/// Default connect timeout, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default whole-request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint and timeouts for the HTTP holdings provider.
#[derive(Clone, Debug)]
pub struct HoldingsApiConfig {
    /// Full URL of the holdings endpoint; the provider issues a GET against it as-is.
    pub url: String,

    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,

    /// Maximum time for the whole request, body included.
    pub request_timeout: Duration,
}

impl HoldingsApiConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
