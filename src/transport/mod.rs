//! HTTP transport: one authenticated POST per call, body fully drained before return.

mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
