use std::fmt;

use crate::config::API;

/// Failure of a single backend call.
/// Transport problems, non-2xx answers and undecodable bodies are kept apart so the
/// log line says which one happened even though the user sees one notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The base URL cannot carry the endpoint path
    InvalidUrl(String),
    /// Connect/IO/timeout failure before a response arrived
    Transport { message: String, timed_out: bool },
    /// The backend answered with a non-success status
    Status { status: u16, body: String },
    /// The body was not the JSON shape we expected
    Decode(String),
}

impl ApiError {
    /// Short machine-readable tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl(_) => "invalid_url",
            ApiError::Transport {
                timed_out: true, ..
            } => "timeout",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode(_) => "decode",
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            body: truncate_chars(body, API.client.max_error_body_chars),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "Invalid backend URL: {}", msg),
            ApiError::Transport {
                message,
                timed_out: true,
            } => write!(f, "Request timed out: {}", message),
            ApiError::Transport { message, .. } => write!(f, "Backend unreachable: {}", message),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "Backend returned HTTP {}", status)
            }
            ApiError::Status { status, body } => {
                write!(f, "Backend returned HTTP {}: {}", status, body)
            }
            ApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return ApiError::status(status.as_u16(), "");
        }
        ApiError::Transport {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
