use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Response-shaped failures keep the HTTP status code and the raw response
/// body so callers can inspect what the API actually said.
#[derive(Debug)]
pub enum AppError {
    /// A login attempt was rejected by the API
    Authentication {
        /// HTTP status returned by the auth endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Any other non-2xx response
    Request {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport-level failure (connection, timeout, TLS). Never retried.
    Network(reqwest::Error),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// I/O failure while reading an attachment payload
    Io(std::io::Error),
    /// Invalid caller-supplied input
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status code for response-shaped errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication { status, .. } | AppError::Request { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns the raw response body for response-shaped errors
    pub fn body(&self) -> Option<&str> {
        match self {
            AppError::Authentication { body, .. } | AppError::Request { body, .. } => {
                Some(body.as_str())
            }
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication { status, body } => {
                write!(f, "authentication failed with status {status}: {body}")
            }
            AppError::Request { status, body } => {
                write!(f, "request failed with status {status}: {body}")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
