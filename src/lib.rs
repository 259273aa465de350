//! # spout
//!
//! Async client for the Spout content-analysis API.
//!
//! The service exposes three operations, all `POST` with JSON bodies and bearer
//! authentication:
//!
//! | Operation | Path | Success |
//! |-----------|------|---------|
//! | [`SpoutClient::summarize`] | `/v1/summarize` | `200` + [`SummaryResponse`] |
//! | [`SpoutClient::query`] | `/v1/query` | `200` + [`ArticleQueryResponse`] |
//! | [`SpoutClient::feedback`] | `/v1/feedback` | `204` |
//!
//! Each call is a single attempt bounded by the client timeout (10 seconds by
//! default). Failures are reported through [`Error`], tagged with the
//! [`Operation`] that failed; nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spout::{ArticleQueryRequest, FeedbackRequest, SpoutClient};
//!
//! #[tokio::main]
//! async fn main() -> spout::Result<()> {
//!     let client = SpoutClient::new("https://api.spout.example", "your-api-key");
//!
//!     let resp = client.query(&ArticleQueryRequest::new("rust async runtimes")).await?;
//!     for article in &resp.articles {
//!         println!("{:.2} {}", article.confidence, article.article_title);
//!     }
//!
//!     client.feedback(&FeedbackRequest::helpful(resp.query_id)).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod transport;
pub mod types;

pub use client::{Operation, SpoutApi, SpoutClient, SpoutClientBuilder, DEFAULT_TIMEOUT};
pub use types::{
    ArticleQueryRequest, ArticleQueryResponse, ArticleResult, ChatLog, FeedbackRequest,
    SummaryRequest, SummaryResponse,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
