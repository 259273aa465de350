//! Query feedback payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Helpfulness vote on a previous [`ArticleQueryResponse`](super::ArticleQueryResponse).
///
/// `helpful` is omitted from the body when `false` and defaults to `false`
/// when absent; the service treats both forms the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub query_id: Uuid,
    #[serde(default, skip_serializing_if = "is_false")]
    pub helpful: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl FeedbackRequest {
    pub fn new(query_id: Uuid, helpful: bool) -> Self {
        Self { query_id, helpful }
    }

    pub fn helpful(query_id: Uuid) -> Self {
        Self::new(query_id, true)
    }

    pub fn unhelpful(query_id: Uuid) -> Self {
        Self::new(query_id, false)
    }
}
