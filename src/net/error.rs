//! Transport-level error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`. Call sites log the error
//! and convert it into a user-facing message; nothing here panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, offline...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// Browser APIs are unavailable (native builds and tests).
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Backend-supplied message for a failed status, when one was sent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Pick the backend message if present, otherwise the screen's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Extract a `message` field from an error body, falling back to the raw text.
pub(crate) fn status_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}
