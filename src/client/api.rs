//! Object-safe view of the Spout operations, for callers that want to swap in a
//! test double.

use crate::types::{
    ArticleQueryRequest, ArticleQueryResponse, FeedbackRequest, SummaryRequest, SummaryResponse,
};
use crate::Result;
use async_trait::async_trait;

use super::core::SpoutClient;

#[async_trait]
pub trait SpoutApi: Send + Sync {
    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse>;
    async fn query(&self, request: &ArticleQueryRequest) -> Result<ArticleQueryResponse>;
    async fn feedback(&self, request: &FeedbackRequest) -> Result<()>;
}

#[async_trait]
impl SpoutApi for SpoutClient {
    async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse> {
        SpoutClient::summarize(self, request).await
    }

    async fn query(&self, request: &ArticleQueryRequest) -> Result<ArticleQueryResponse> {
        SpoutClient::query(self, request).await
    }

    async fn feedback(&self, request: &FeedbackRequest) -> Result<()> {
        SpoutClient::feedback(self, request).await
    }
}
