//! Session client for the ServiceTrade API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Session-cookie authentication
//! - Transparent re-login when the session expires
//! - Generic verb methods with envelope unwrapping
//! - Multipart attachment upload
//!
//! # Example
//! ```ignore
//! use servicetrade_client::client::Client;
//! use servicetrade_client::config::Config;
//!
//! let client = Client::new(Config::new());
//! client.login(None, None).await?;
//!
//! // Requests carry the session cookie automatically
//! let jobs: Option<serde_json::Value> = client.get("job").await?;
//! ```

use crate::config::Config;
use crate::constants::{ATTACHMENT_PATH, AUTH_PATH, UPLOAD_FIELD, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::{AttachmentFile, AttachmentParams};
use crate::model::responses::{Attachment, AuthSession, parse_envelope};
use crate::session::auth::Auth;
use crate::session::interface::{Authenticator, SessionObserver};
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Session client for the ServiceTrade API
///
/// Owns one HTTP transport bound to `{base_url}/api` and the session cookie
/// shared by every request issued through it. Unless disabled in the
/// configuration, a request rejected with 401 triggers one transparent
/// re-login with the configured credentials followed by a single retry.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client. No network I/O happens until the first request.
    pub fn new(config: Config) -> Self {
        Self::build(config, None)
    }

    /// Creates a new client with a session observer.
    ///
    /// The observer is notified whenever the API hands out a new session
    /// cookie and whenever the stored cookie is invalidated.
    pub fn with_observer(config: Config, observer: Arc<dyn SessionObserver>) -> Self {
        Self::build(config, Some(observer))
    }

    fn build(config: Config, observer: Option<Arc<dyn SessionObserver>>) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(Auth::new(config.clone(), observer));

        let http_client = HttpClient::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            auth,
            http_client,
            config,
        }
    }

    /// Logs in against the auth endpoint.
    ///
    /// Explicit arguments override the configured credentials. On success the
    /// returned session cookie replaces the stored one.
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AuthSession>, AppError> {
        self.auth.login(username, password).await
    }

    /// Ends the server-side session.
    ///
    /// The locally stored cookie is left in place; it is only dropped once
    /// the server rejects it.
    pub async fn logout(&self) -> Result<(), AppError> {
        let _ = self.delete::<Value>(AUTH_PATH).await?;
        Ok(())
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "job/123")
    ///
    /// # Returns
    /// * `Ok(Some(T))` - Unwrapped `data` payload
    /// * `Ok(None)` - Response carried no `data` field
    /// * `Err(AppError)` - If the request fails
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<Option<T>, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<Option<T>, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Uploads a file to the attachment endpoint.
    ///
    /// Builds a multipart form from the serialized fields of `params` plus a
    /// file part carrying the payload, filename, and content type. Returns
    /// the unwrapped attachment descriptor.
    pub async fn attach(
        &self,
        params: &AttachmentParams,
        file: &AttachmentFile,
    ) -> Result<Option<Attachment>, AppError> {
        match self.attach_internal(params, file).await {
            Ok(response) => parse_envelope(response).await,
            Err(original) if self.should_relogin(&original) => {
                warn!("Session rejected with 401, attempting re-login");
                self.auth.clear_cookie().await;
                if let Err(e) = self.auth.login(None, None).await {
                    warn!("Re-login failed: {}", e);
                    return Err(original);
                }
                let response = self.attach_internal(params, file).await?;
                parse_envelope(response).await
            }
            Err(e) => Err(e),
        }
    }

    /// Injects a session cookie obtained out-of-band (e.g. restored from
    /// prior persistence), overriding whatever is currently stored.
    pub async fn set_cookie(&self, value: impl Into<String>) {
        self.auth.set_cookie(value.into()).await;
    }

    /// Returns the currently stored session cookie, if any
    pub async fn session_cookie(&self) -> Option<String> {
        self.auth.session_cookie().await
    }

    /// Makes a request against `{base_url}/api/{path}`.
    ///
    /// This is the generic dispatch behind the verb methods. A 401 response
    /// is intercepted once: the stored cookie is cleared, a fresh login with
    /// the configured credentials is attempted, and the original request is
    /// retried exactly once. If the re-login itself fails, the original
    /// request's error is propagated, not the login error.
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<Option<T>, AppError> {
        match self.request_internal(method.clone(), path, &body).await {
            Ok(response) => parse_envelope(response).await,
            Err(original) if self.should_relogin(&original) => {
                warn!("Session rejected with 401, attempting re-login");
                self.auth.clear_cookie().await;
                if let Err(e) = self.auth.login(None, None).await {
                    warn!("Re-login failed: {}", e);
                    return Err(original);
                }
                let response = self.request_internal(method, path, &body).await?;
                parse_envelope(response).await
            }
            Err(e) => Err(e),
        }
    }

    /// A 401 on anything but the login call itself is worth one re-login
    fn should_relogin(&self, error: &AppError) -> bool {
        self.config.auto_relogin
            && matches!(
                error,
                AppError::Request { status, .. } if *status == StatusCode::UNAUTHORIZED
            )
    }

    /// Internal method to make HTTP requests
    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = self.api_url(path);
        debug!("{} {}", method, url);

        let mut request = self.http_client.request(method, &url);

        if let Some(cookie) = self.auth.session_cookie().await {
            request = request.header(COOKIE, cookie);
        }

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        check_status(response).await
    }

    /// Internal method to make the multipart attachment request
    async fn attach_internal(
        &self,
        params: &AttachmentParams,
        file: &AttachmentFile,
    ) -> Result<Response, AppError> {
        let url = self.api_url(ATTACHMENT_PATH);
        debug!("POST {} (multipart, {} bytes)", url, file.bytes.len());

        // Multipart forms are consumed on send, so the form is rebuilt here
        // for the re-login retry as well.
        let form = build_attachment_form(params, file)?;
        let mut request = self.http_client.post(&url).multipart(form);

        if let Some(cookie) = self.auth.session_cookie().await {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await?;
        check_status(response).await
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url(), path.trim_start_matches('/'))
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

/// Builds the multipart form for an attachment upload
fn build_attachment_form(
    params: &AttachmentParams,
    file: &AttachmentFile,
) -> Result<Form, AppError> {
    let fields = serde_json::to_value(params)?;

    let mut form = Form::new();
    if let Value::Object(map) = fields {
        for (key, value) in map {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            form = form.text(key, text);
        }
    }

    let part = Part::bytes(file.bytes.clone())
        .file_name(file.file_name.clone())
        .mime_str(&file.content_type)?;

    Ok(form.part(UPLOAD_FIELD, part))
}

/// Maps non-2xx responses to a request error carrying status and body
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Request { status, body })
}
