//! # ServiceTrade Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use servicetrade_client::prelude::*;
//!
//! let config = Config::with_credentials("https://api.servicetrade.com", "user", "pass");
//! let client = Client::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the ServiceTrade API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// SESSION CLIENT AND AUTHENTICATION
// ============================================================================

/// Session client with verb methods and automatic re-login
pub use crate::client::Client;

/// Authentication manager holding the session cookie
pub use crate::session::auth::Auth;

/// Authentication and session-observer traits
pub use crate::session::interface::{Authenticator, SessionObserver};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{AttachmentFile, AttachmentParams, LoginRequest};

/// Response models
pub use crate::model::responses::{Attachment, AuthSession, unwrap_data};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for HTTP operations (if needed for custom implementations)
pub use reqwest::Method;
