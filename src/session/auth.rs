//! Authentication manager for the ServiceTrade API
//!
//! Owns the single mutable piece of state in the library: the session
//! cookie. Login stores it, rejection clears it, and the configured
//! observer is notified of both transitions.

use crate::config::Config;
use crate::constants::{AUTH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::LoginRequest;
use crate::model::responses::{AuthSession, parse_envelope};
use crate::session::cookie::extract_session_cookie;
use crate::session::interface::{Authenticator, SessionObserver};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Authentication manager holding the session cookie
pub struct Auth {
    config: Arc<Config>,
    client: HttpClient,
    cookie: RwLock<Option<String>>,
    observer: Option<Arc<dyn SessionObserver>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `observer` - Optional observer notified of cookie transitions
    pub fn new(config: Arc<Config>, observer: Option<Arc<dyn SessionObserver>>) -> Self {
        let client = HttpClient::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        let cookie = RwLock::new(config.session_cookie.clone());

        Self {
            config,
            client,
            cookie,
            observer,
        }
    }

    /// Stores a cookie handed out by the API and notifies the observer
    pub(crate) async fn store_cookie(&self, value: String) {
        {
            let mut cookie = self.cookie.write().await;
            *cookie = Some(value.clone());
        }
        if let Some(observer) = &self.observer {
            observer.on_cookie_set(&value);
        }
    }
}

#[async_trait]
impl Authenticator for Auth {
    async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AuthSession>, AppError> {
        let (username, password) = self.config.credentials.resolve(username, password);
        let url = format!("{}/{}", self.config.api_url(), AUTH_PATH);

        debug!("POST {}", url);

        let body = LoginRequest { username, password };
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        debug!("Login response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            self.clear_cookie().await;
            return Err(AppError::Authentication { status, body });
        }

        if let Some(cookie) = extract_session_cookie(response.headers()) {
            debug!("Obtained session cookie of length: {}", cookie.len());
            self.store_cookie(cookie).await;
        }

        let session = parse_envelope(response).await?;
        info!("✓ Login successful");
        Ok(session)
    }

    async fn session_cookie(&self) -> Option<String> {
        self.cookie.read().await.clone()
    }

    async fn set_cookie(&self, cookie: String) {
        debug!("Injecting session cookie of length: {}", cookie.len());
        let mut stored = self.cookie.write().await;
        *stored = Some(cookie);
    }

    async fn clear_cookie(&self) {
        let cleared = {
            let mut cookie = self.cookie.write().await;
            cookie.take().is_some()
        };
        if cleared {
            debug!("Session cookie cleared");
            if let Some(observer) = &self.observer {
                observer.on_cookie_cleared();
            }
        }
    }
}
