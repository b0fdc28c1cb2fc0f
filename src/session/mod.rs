/// Authentication manager owning the session cookie
pub mod auth;
/// Session cookie extraction from response headers
pub mod cookie;
/// Authentication and observer traits
pub mod interface;
