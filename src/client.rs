//! Spout API client.
//!
//! Keep the public surface small: one client, three operations, one builder.
//! Implementation details are split into submodules under `src/client/`.

mod api;
pub mod builder;
pub mod core;
mod endpoint;
mod execution;

pub use api::SpoutApi;
pub use builder::SpoutClientBuilder;
pub use self::core::{SpoutClient, DEFAULT_TIMEOUT};
pub use endpoint::Operation;
