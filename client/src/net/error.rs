//! The single error shape surfaced by the request layer.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures (network down, DNS, CORS) and application failures
//! (non-2xx with a structured body) collapse into one `ApiError`. Callers only
//! ever read `message`; `status` exists for logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Message used when neither the body nor the transport said anything useful.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Normalized request failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: Option<u16>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() { GENERIC_FAILURE.to_owned() } else { message };
        Self { message, status: None }
    }

    /// Error for a response that arrived with a non-2xx status.
    ///
    /// Prefers the body's `error` string; otherwise uses the transport-level
    /// wording for an HTTP failure.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = error_field(body).unwrap_or_else(|| format!("Request failed with status code {status}"));
        Self { message, status: Some(status) }
    }

    /// Error for a request that never produced a response.
    pub fn from_transport(message: &str) -> Self {
        Self::new(message)
    }

    /// Error for a 2xx response whose body could not be decoded.
    pub fn invalid_body(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Invalid response body: {detail}"))
    }
}

fn error_field(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.error? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
