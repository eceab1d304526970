use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use folioview_core::constants::DEFAULT_CURRENCY_SYMBOL;
use folioview_holdings_api::provider::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

const DEFAULT_HOLDINGS_URL: &str = "https://portfolio-api.invalid/";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub holdings_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub currency_symbol: String,
    pub cors_allow: Vec<String>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FV_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid FV_LISTEN_ADDR")?;
        let holdings_url =
            std::env::var("FV_HOLDINGS_URL").unwrap_or_else(|_| DEFAULT_HOLDINGS_URL.into());
        let cors_allow = std::env::var("FV_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let currency_symbol = std::env::var("FV_CURRENCY_SYMBOL")
            .unwrap_or_else(|_| DEFAULT_CURRENCY_SYMBOL.into());
        let log_format = std::env::var("FV_LOG_FORMAT").unwrap_or_else(|_| "text".into());

        Ok(Self {
            listen_addr,
            holdings_url,
            connect_timeout: secs_from_env("FV_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: secs_from_env("FV_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            currency_symbol,
            cors_allow,
            log_format,
        })
    }
}

fn secs_from_env(key: &str, default: u64) -> Duration {
    let secs = std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default);
    Duration::from_secs(secs)
}
