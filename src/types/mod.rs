//! # Types Module
//!
//! Wire payloads for the Spout API. These are plain serde DTOs: field names are
//! the exact snake_case keys the service expects, and nothing here performs I/O.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChatLog`] | One chat message and where it came from |
//! | [`SummaryRequest`] / [`SummaryResponse`] | Chat log summarization |
//! | [`ArticleQueryRequest`] / [`ArticleQueryResponse`] | Free-text article search |
//! | [`ArticleResult`] | A single matching article |
//! | [`FeedbackRequest`] | Helpfulness vote on a previous query |
//!
//! ## Example
//!
//! ```rust
//! use spout::types::{ChatLog, SummaryRequest};
//!
//! let req = SummaryRequest::new(vec![
//!     ChatLog::new("the build is red again", "slack"),
//!     ChatLog::new("reverting the last merge", "slack"),
//! ]);
//! assert_eq!(req.logs.len(), 2);
//! ```

pub mod article;
pub mod feedback;
pub mod summary;

pub use article::{ArticleQueryRequest, ArticleQueryResponse, ArticleResult};
pub use feedback::FeedbackRequest;
pub use summary::{ChatLog, SummaryRequest, SummaryResponse};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's default, matching services that encode empty
/// lists as `null`. Pair with `#[serde(default)]` to cover absent fields too.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
