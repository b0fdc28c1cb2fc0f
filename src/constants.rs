/// Default base URL for the ServiceTrade API, without the `/api` suffix
pub const DEFAULT_BASE_URL: &str = "https://api.servicetrade.com";
/// User agent string used in HTTP requests to identify this client to the ServiceTrade API
pub const USER_AGENT: &str = "servicetrade-client-rs/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT: u64 = 30;
/// Endpoint for session login (POST) and logout (DELETE)
pub const AUTH_PATH: &str = "auth";
/// Endpoint for multipart attachment uploads
pub const ATTACHMENT_PATH: &str = "attachment";
/// Multipart field name carrying the file payload
pub const UPLOAD_FIELD: &str = "uploadedFile";
/// Name of the session cookie issued by the API.
///
/// Only `Set-Cookie` values whose name starts with this prefix are treated
/// as session credentials; other cookies in the response are ignored.
pub const SESSION_COOKIE_NAME: &str = "PHPSESSID";
