use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session details returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// Whether the API accepted the credentials
    pub authenticated: bool,
    /// Token identifying the established session
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Profile of the authenticated user, as returned by the API
    #[serde(default)]
    pub user: Option<Value>,
}

/// Descriptor of an uploaded attachment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Attachment identifier
    pub id: u64,
    /// URI the uploaded file is served from
    pub uri: String,
    /// Stored filename
    pub file_name: String,
}

/// Extracts the nested `data` field from an API response body.
///
/// Every successful response is expected to be the `{ "data": ... }`
/// envelope. A body without a non-null `data` field (including non-object
/// bodies) yields `Ok(None)` rather than an error; only deserializing a
/// present payload into `T` can fail.
pub fn unwrap_data<T: DeserializeOwned>(mut body: Value) -> Result<Option<T>, serde_json::Error> {
    match body.get_mut("data") {
        Some(data) if !data.is_null() => Ok(Some(serde_json::from_value(data.take())?)),
        _ => Ok(None),
    }
}

/// Reads a successful response body and unwraps its envelope.
///
/// An empty body is treated the same as a body without `data`.
pub async fn parse_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, AppError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    let body: Value = serde_json::from_str(&text)?;
    Ok(unwrap_data(body)?)
}
