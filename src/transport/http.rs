use crate::client::Operation;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

/// Status and fully-read body of a single round trip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    /// Body as text, lossily decoded, for diagnostics.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Bearer-authenticated JSON transport over a shared `reqwest::Client`.
///
/// Holds read-only configuration only; cloning shares the underlying
/// connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_key: String,
    timeout: Duration,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` to `url` and read the whole response.
    ///
    /// The response is consumed by value while reading, so its connection is
    /// released on every exit path, including a failed read.
    pub async fn post_json(&self, operation: Operation, url: &str, body: Vec<u8>) -> Result<RawResponse> {
        let request = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout)
            .body(body)
            .build()
            .map_err(|source| Error::RequestBuild { operation, source })?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::Transport {
                operation,
                source: TransportError::Http(e),
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| Error::BodyRead {
            operation,
            source: TransportError::Http(e),
        })?;

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
        }
    }
}
