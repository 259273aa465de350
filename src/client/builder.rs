use crate::client::core::{SpoutClient, DEFAULT_TIMEOUT};
use crate::transport::HttpTransport;
use crate::{Error, Result};
use std::time::Duration;

/// Builder for clients with custom configuration.
///
/// Unset values fall back to the environment:
/// - `SPOUT_BASE_URL`
/// - `SPOUT_API_KEY`
/// - `SPOUT_TIMEOUT_SECS` (default 10)
#[derive(Default)]
pub struct SpoutClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl SpoutClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL without a trailing slash, e.g. `https://api.spout.example`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Per-call wall-clock bound covering connect, send and body read.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS roots, pool settings).
    ///
    /// The per-call timeout is still applied on every request.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<SpoutClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("SPOUT_BASE_URL").ok())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::configuration("Base URL required (SPOUT_BASE_URL)"))?;
        let api_key = self
            .api_key
            .or_else(|| std::env::var("SPOUT_API_KEY").ok())
            .ok_or_else(|| Error::configuration("API key required (SPOUT_API_KEY)"))?;
        let timeout = self
            .timeout
            .or_else(|| {
                std::env::var("SPOUT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .map(Duration::from_secs)
            })
            .unwrap_or(DEFAULT_TIMEOUT);

        if base_url.ends_with('/') {
            tracing::warn!(base_url = %base_url, "base URL has a trailing slash; request paths will contain '//'");
        }

        let http_client = self.http_client.unwrap_or_default();
        Ok(SpoutClient::from_transport(
            base_url,
            HttpTransport::new(http_client, api_key, timeout),
        ))
    }
}
