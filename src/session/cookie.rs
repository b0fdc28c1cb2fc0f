use crate::constants::SESSION_COOKIE_NAME;
use reqwest::header::{HeaderMap, SET_COOKIE};

/// Extracts the session cookie from a login response.
///
/// Scans every `Set-Cookie` header, keeps the leading `name=value` pair and
/// drops the attributes (`Path`, `HttpOnly`, ...). Only a cookie whose name
/// starts with [`SESSION_COOKIE_NAME`] counts; any other cookie the server
/// sets alongside the session is ignored.
pub fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|raw| {
            let pair = raw.split(';').next()?.trim();
            let (name, _) = pair.split_once('=')?;
            if name.trim().starts_with(SESSION_COOKIE_NAME) {
                Some(pair.to_string())
            } else {
                None
            }
        })
}
