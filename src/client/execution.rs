//! Request execution: the single-attempt pipeline shared by every operation.
//!
//! serialize -> build -> send -> drain body -> check status -> decode.
//! No retry or fallback happens here; a failed attempt is returned as-is.

use crate::transport::RawResponse;
use crate::types::ArticleQueryResponse;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, warn};

use super::core::SpoutClient;
use super::endpoint::Operation;

impl SpoutClient {
    /// Run one authenticated round trip and return the body of a response whose
    /// status matched the operation's success code.
    pub(crate) async fn execute_once<Req>(&self, operation: Operation, request: &Req) -> Result<RawResponse>
    where
        Req: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(request).map_err(|source| Error::Marshal { operation, source })?;
        let url = format!("{}{}", self.base_url(), operation.path());

        debug!(operation = %operation, url = %url, bytes = body.len(), "dispatching request");
        let start = Instant::now();

        let raw = match self.transport().post_json(operation, &url, body).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    operation = %operation,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    timeout = e.is_timeout(),
                    error = %e,
                    "request failed"
                );
                return Err(e);
            }
        };

        debug!(
            operation = %operation,
            http_status = raw.status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "response received"
        );

        expect_status(operation, raw)
    }

    /// Round trip for operations that answer with a JSON document.
    pub(crate) async fn execute_json<Req, Resp>(&self, operation: Operation, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let raw = self.execute_once(operation, request).await?;
        decode(operation, &raw.body)
    }

    /// Round trip for operations that answer with 204 No Content.
    pub(crate) async fn execute_no_content<Req>(&self, operation: Operation, request: &Req) -> Result<()>
    where
        Req: Serialize + ?Sized,
    {
        let raw = self.execute_once(operation, request).await?;
        decode_no_content(operation, &raw.body)
    }
}

pub(crate) fn expect_status(operation: Operation, raw: RawResponse) -> Result<RawResponse> {
    if raw.status == operation.success_status() {
        return Ok(raw);
    }
    let body = raw.body_text();
    warn!(
        operation = %operation,
        http_status = raw.status.as_u16(),
        expected = operation.success_status().as_u16(),
        "unexpected response status"
    );
    Err(Error::UnexpectedStatus {
        operation,
        status: raw.status,
        body,
    })
}

pub(crate) fn decode<T: DeserializeOwned>(operation: Operation, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Unmarshal { operation, source })
}

/// An empty body is success. A non-empty one must still be a well-formed query
/// response; the parsed value is discarded.
pub(crate) fn decode_no_content(operation: Operation, body: &[u8]) -> Result<()> {
    if body.is_empty() {
        return Ok(());
    }
    decode::<ArticleQueryResponse>(operation, body)?;
    debug!(operation = %operation, "discarded body of no-content response");
    Ok(())
}
