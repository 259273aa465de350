//! Chat log summarization payloads.

use serde::{Deserialize, Serialize};

/// A single message from a chat source. Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatLog {
    pub text: String,
    pub source: String,
}

impl ChatLog {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// Collection of chat logs for a user, sent to `/v1/summarize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub logs: Vec<ChatLog>,
}

impl SummaryRequest {
    pub fn new(logs: Vec<ChatLog>) -> Self {
        Self { logs }
    }
}

/// Summary returned by `/v1/summarize`.
///
/// Currently mirrors the request shape; the service has not settled on a
/// richer format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub logs: Vec<ChatLog>,
}
