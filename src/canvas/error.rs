//! Error types for the Canvas HTTP access layer.
//!
//! [`ApiError`] is the normalized failure produced once a request has
//! exhausted its retries or hit a non-retryable status. Everything else in
//! [`CanvasError`] is an unexpected failure that is propagated as-is.

use serde_json::Value;
use thiserror::Error;

/// Result type for Canvas client operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Maximum number of characters of a plain-text body kept in an error message.
const MAX_TEXT_DETAIL: usize = 200;

/// Normalized Canvas API failure.
///
/// `status` is the HTTP status of the last response, or `0` when no response
/// was received at all. `body` is the raw decoded response body (`Null` for
/// network failures).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub body: Value,
}

impl ApiError {
    /// Build an error from a received (non-2xx) response.
    pub fn from_response(status: u16, body: Value) -> Self {
        let detail = ErrorDetail::classify(&body).render();
        Self {
            message: format!("API Error ({}): {}", status, detail),
            status,
            body,
        }
    }

    /// Build an error for a request that never produced a response.
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self {
            message: format!("Network error: {}", cause),
            status: 0,
            body: Value::Null,
        }
    }

    /// Whether this failure happened below the HTTP layer.
    pub fn is_network(&self) -> bool {
        self.status == 0
    }
}

/// Errors returned by [`CanvasClient`](super::CanvasClient) and its accessors.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The API (or the network) failed; see [`ApiError`].
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTTP request could not be constructed.
    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    /// Query parameters could not be encoded.
    #[error("Failed to encode query string: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// An accessor argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A pagination follow-up returned something other than a JSON array,
    /// or its link points back at a page already fetched.
    #[error("Invalid pagination page at {0}")]
    Pagination(String),
}

impl CanvasError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// HTTP status carried by the error, if it came from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Borrow the typed API error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Shape of an error body, checked in priority order.
#[derive(Debug)]
enum ErrorDetail<'a> {
    Text(&'a str),
    Message(&'a str),
    Errors(&'a [Value]),
    Object(&'a Value),
    Other(&'a Value),
}

impl<'a> ErrorDetail<'a> {
    fn classify(body: &'a Value) -> Self {
        match body {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => {
                if let Some(message) = map.get("message").and_then(Value::as_str) {
                    Self::Message(message)
                } else if let Some(errors) = map.get("errors").and_then(Value::as_array) {
                    Self::Errors(errors)
                } else {
                    Self::Object(body)
                }
            }
            other => Self::Other(other),
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Text(text) => truncate(text),
            Self::Message(message) => (*message).to_string(),
            Self::Errors(errors) => errors
                .iter()
                .map(error_entry_message)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Object(value) | Self::Other(value) => value.to_string(),
        }
    }
}

/// Canvas reports `errors` either as strings or as `{ "message": ... }` objects.
fn error_entry_message(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| entry.to_string()),
        other => other.to_string(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_DETAIL {
        let head: String = text.chars().take(MAX_TEXT_DETAIL).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
