use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the ServiceTrade API
pub struct Credentials {
    /// Username for the ServiceTrade account
    pub username: String,
    /// Password for the ServiceTrade account
    pub password: String,
}

impl Credentials {
    /// Resolves the effective credentials for a login attempt.
    ///
    /// Explicit arguments take precedence over the configured values.
    pub fn resolve(&self, username: Option<&str>, password: Option<&str>) -> (String, String) {
        (
            username.unwrap_or(&self.username).to_string(),
            password.unwrap_or(&self.password).to_string(),
        )
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API transport
pub struct RestApiConfig {
    /// Base URL for the ServiceTrade API, without the `/api` suffix
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the ServiceTrade API client
///
/// Immutable after construction; the session cookie held by the client is
/// the only piece of mutable state in the library.
pub struct Config {
    /// Authentication credentials used for login and automatic re-login
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Optional user-agent override for outgoing requests
    pub user_agent: Option<String>,
    /// Optional session cookie restored from prior persistence
    pub session_cookie: Option<String>,
    /// Whether a 401 response triggers a transparent re-login and retry
    pub auto_relogin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration instance from the environment.
    ///
    /// Loads a `.env` file if one is present, then reads the
    /// `SERVICETRADE_*` variables, falling back to defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            credentials: Credentials {
                username: get_env_or_default("SERVICETRADE_USERNAME", String::new()),
                password: get_env_or_default("SERVICETRADE_PASSWORD", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SERVICETRADE_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("SERVICETRADE_REST_TIMEOUT", DEFAULT_TIMEOUT),
            },
            user_agent: get_env_or_none("SERVICETRADE_USER_AGENT"),
            session_cookie: get_env_or_none("SERVICETRADE_SESSION_COOKIE"),
            auto_relogin: get_env_or_default("SERVICETRADE_AUTO_RELOGIN", true),
        }
    }

    /// Creates a configuration with explicit credentials against a base URL.
    ///
    /// Remaining fields take their defaults; useful for tests and embedding.
    pub fn with_credentials(base_url: &str, username: &str, password: &str) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: DEFAULT_TIMEOUT,
            },
            user_agent: None,
            session_cookie: None,
            auto_relogin: true,
        }
    }

    /// Returns the API root, `{base_url}/api`, with trailing slashes trimmed
    pub fn api_url(&self) -> String {
        format!("{}/api", self.rest_api.base_url.trim_end_matches('/'))
    }
}
