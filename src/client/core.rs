use crate::transport::HttpTransport;
use crate::types::{
    ArticleQueryRequest, ArticleQueryResponse, FeedbackRequest, SummaryRequest, SummaryResponse,
};
use crate::Result;
use std::time::Duration;

use super::builder::SpoutClientBuilder;
use super::endpoint::Operation;

/// Per-call timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Spout API.
///
/// Holds read-only configuration and a pooled HTTP transport. Cloning is cheap
/// and clones share connections; a single instance may serve concurrent calls.
#[derive(Debug, Clone)]
pub struct SpoutClient {
    base_url: String,
    transport: HttpTransport,
}

impl SpoutClient {
    /// Create a client with the default 10 second timeout.
    ///
    /// `base_url` is used verbatim: pass it without a trailing slash. No I/O
    /// happens here.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::from_transport(
            base_url,
            HttpTransport::new(reqwest::Client::new(), api_key, DEFAULT_TIMEOUT),
        )
    }

    pub fn builder() -> SpoutClientBuilder {
        SpoutClientBuilder::new()
    }

    /// Build from `SPOUT_BASE_URL`, `SPOUT_API_KEY` and optional `SPOUT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        SpoutClientBuilder::new().build()
    }

    pub(crate) fn from_transport(base_url: impl Into<String>, transport: HttpTransport) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.transport.timeout()
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Summarize a batch of chat logs.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        self.execute_json(Operation::Summarize, request).await
    }

    /// Search articles by free text.
    pub async fn query(&self, request: &ArticleQueryRequest) -> Result<ArticleQueryResponse> {
        self.execute_json(Operation::Query, request).await
    }

    /// Record whether a previous query's results were helpful.
    pub async fn feedback(&self, request: &FeedbackRequest) -> Result<()> {
        self.execute_no_content(Operation::Feedback, request).await
    }
}
