use crate::client::Operation;
use crate::transport::TransportError;
use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for the Spout client.
///
/// Every variant that comes out of a remote call carries the [`Operation`] that
/// failed, so callers can match on the failure kind without parsing messages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: could not encode {operation} request: {source}")]
    Marshal {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request build error: could not construct {operation} request: {source}")]
    RequestBuild {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Network transport error during {operation}: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    #[error("Body read error during {operation}: {source}")]
    BodyRead {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    #[error("Unexpected response from {operation}: {status}; {body}")]
    UnexpectedStatus {
        operation: Operation,
        status: StatusCode,
        body: String,
    },

    #[error("Deserialization error: invalid {operation} response: {source}")]
    Unmarshal {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
        }
    }

    /// The remote operation this error belongs to, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::Marshal { operation, .. }
            | Error::RequestBuild { operation, .. }
            | Error::Transport { operation, .. }
            | Error::BodyRead { operation, .. }
            | Error::UnexpectedStatus { operation, .. }
            | Error::Unmarshal { operation, .. } => Some(*operation),
            Error::Configuration { .. } => None,
        }
    }

    /// HTTP status of a response that did not match the operation's success code.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the call failed because the per-call timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport { source, .. } | Error::BodyRead { source, .. } => {
                source.is_timeout()
            }
            _ => false,
        }
    }
}
