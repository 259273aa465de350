//! Article query payloads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Free-text article search, sent to `/v1/query`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleQueryRequest {
    pub text_query: String,
}

impl ArticleQueryRequest {
    pub fn new(text_query: impl Into<String>) -> Self {
        Self {
            text_query: text_query.into(),
        }
    }
}

/// Result of a successful query. `query_id` is what feedback refers back to.
///
/// A query with no matches may carry `"articles": null`; both `null` and an
/// absent field decode as an empty list. An absent or `null` `query_id`
/// decodes as the nil UUID; a malformed one is still an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleQueryResponse {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub query_id: Uuid,
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub articles: Vec<ArticleResult>,
}

/// A single article that matched the query. Absent fields decode as zero values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleResult {
    pub article_id: String,
    /// Expected in `[0, 1]`; passed through as reported by the service.
    pub confidence: f64,
    pub source: String,
    pub source_url: String,
    pub article_body: String,
    pub article_title: String,
}
