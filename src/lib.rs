//! # ServiceTrade Client
//!
//! Async client for the ServiceTrade REST API with session-cookie
//! authentication and transparent re-login on session expiry.
//!
//! The client owns a single long-lived HTTP transport bound to
//! `{base_url}/api` and a single mutable session cookie that is attached to
//! every outgoing request. Responses are unwrapped from the API's
//! `{ "data": ... }` envelope before they reach the caller.
//!
//! ## Example
//! ```ignore
//! use servicetrade_client::prelude::*;
//!
//! let config = Config::new();
//! let client = Client::new(config);
//!
//! client.login(None, None).await?;
//! let jobs: Option<serde_json::Value> = client.get("job").await?;
//! client.logout().await?;
//! ```

/// High-level session client with verb methods and the re-login interceptor
pub mod client;
/// Client configuration loaded from the environment
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Request and response models
pub mod model;
/// Convenient re-exports of the commonly used types
pub mod prelude;
/// Session cookie handling and authentication
pub mod session;
/// Environment and logging utilities
pub mod utils;

/// Library version, taken from the crate manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
