//! Unified SDK error types.
//!
//! [`SdkError`] and [`HttpError`] are what operations return. [`ErrorKind`] is
//! the cloneable classification stored in state containers (cart snapshot,
//! address book, checkout flow) so the UI can render a banner from it.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid coupon: {0}")]
    InvalidCoupon(String),

    #[error("Payment error: {0}")]
    Payment(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Not authenticated: no credential for {0}")]
    MissingCredential(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected response body (status {status}): {message}")]
    UnexpectedBody { status: u16, message: String },
}

/// Error classification kept in state snapshots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport or connection failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or rejected credential.
    #[error("You need to log in")]
    Unauthenticated,

    /// 404. On order fetch this means "no active order yet".
    #[error("Not found: {0}")]
    NotFound(String),

    /// 4xx with a structured body, or a request rejected before sending.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid coupon: {0}")]
    InvalidCoupon(String),

    /// 5xx or any unexpected status/body.
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Payment widget tokenization failure or declined charge.
    #[error("Payment error: {0}")]
    Payment(String),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Classify this error for display/state storage.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Http(e) => e.kind(),
            SdkError::Validation(msg) => ErrorKind::Validation(msg.clone()),
            SdkError::InvalidCoupon(msg) => ErrorKind::InvalidCoupon(msg.clone()),
            SdkError::Payment(msg) => ErrorKind::Payment(msg.clone()),
            SdkError::Serde(e) => ErrorKind::Other(e.to_string()),
            SdkError::Other(msg) => ErrorKind::Other(msg.clone()),
        }
    }

    /// Whether the server answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Http(HttpError::NotFound(_)))
    }
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => {
                if e.is_decode() {
                    ErrorKind::Server {
                        status: e.status().map(|s| s.as_u16()).unwrap_or(200),
                        message: e.to_string(),
                    }
                } else {
                    ErrorKind::Network(e.to_string())
                }
            }
            HttpError::MissingCredential(_) | HttpError::Unauthorized => {
                ErrorKind::Unauthenticated
            }
            HttpError::ServerError { status, body } => ErrorKind::Server {
                status: *status,
                message: body.clone(),
            },
            HttpError::RateLimited => ErrorKind::Server {
                status: 429,
                message: "Too many requests".to_string(),
            },
            HttpError::NotFound(msg) => ErrorKind::NotFound(msg.clone()),
            HttpError::BadRequest(msg) => ErrorKind::Validation(msg.clone()),
            HttpError::Timeout => ErrorKind::Network("request timed out".to_string()),
            HttpError::UnexpectedBody { status, message } => ErrorKind::Server {
                status: *status,
                message: message.clone(),
            },
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Understands `{"message": …}`, `{"detail": …}`, field-error objects
/// (`{"zip": ["This field is required."]}`) and `{"non_field_errors": […]}`.
/// Falls back to the trimmed raw body.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(trimmed)
    else {
        return trimmed.to_string();
    };

    for key in ["message", "detail", "error"] {
        if let Some(serde_json::Value::String(msg)) = map.get(key) {
            return msg.clone();
        }
    }

    let text_of = |value: &serde_json::Value| match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    };

    let mut parts = Vec::new();
    if let Some(value) = map.get("non_field_errors") {
        parts.push(text_of(value));
    }
    let mut fields: Vec<_> = map
        .iter()
        .filter(|(field, _)| field.as_str() != "non_field_errors")
        .collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    for (field, value) in fields {
        parts.push(format!("{field}: {}", text_of(value)));
    }

    if parts.is_empty() {
        trimmed.to_string()
    } else {
        parts.join("; ")
    }
}
