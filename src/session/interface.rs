use crate::error::AppError;
use crate::model::responses::AuthSession;
use async_trait::async_trait;

/// Observer of the session credential lifecycle.
///
/// Implement this to persist the cookie across process restarts: save it in
/// `on_cookie_set`, drop the saved copy in `on_cookie_cleared`, and feed it
/// back through `set_cookie` on startup.
pub trait SessionObserver: Send + Sync {
    /// Called when the API hands out a new session cookie
    fn on_cookie_set(&self, cookie: &str);
    /// Called when the stored cookie is invalidated
    fn on_cookie_cleared(&self);
}

/// Trait for authenticating with the ServiceTrade API
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs in against the auth endpoint and stores the returned session
    /// cookie.
    ///
    /// Explicit arguments override the configured credentials. On rejection
    /// the stored cookie is cleared before the error is returned.
    async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<AuthSession>, AppError>;

    /// Returns the currently stored session cookie, if any
    async fn session_cookie(&self) -> Option<String>;

    /// Injects a session cookie obtained out-of-band, overriding whatever is
    /// currently stored
    async fn set_cookie(&self, cookie: String);

    /// Drops the stored session cookie
    async fn clear_cookie(&self);
}
