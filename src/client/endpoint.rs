//! The three remote operations and their fixed wire contract.

use reqwest::StatusCode;
use std::fmt;

/// A remote operation exposed by the Spout API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Summarize,
    Query,
    Feedback,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Summarize, Operation::Query, Operation::Feedback];

    /// Path appended verbatim to the client's base URL.
    pub fn path(self) -> &'static str {
        match self {
            Operation::Summarize => "/v1/summarize",
            Operation::Query => "/v1/query",
            Operation::Feedback => "/v1/feedback",
        }
    }

    /// The only status code treated as success for this operation.
    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::Summarize | Operation::Query => StatusCode::OK,
            Operation::Feedback => StatusCode::NO_CONTENT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Query => "query",
            Operation::Feedback => "feedback",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
