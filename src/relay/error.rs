//! Error handling for the relay
//!
//! Every failure is classified into one of six variants; the `ResponseError`
//! impl maps each classification onto the client-facing HTTP status and the
//! `{ error, status?, details? }` response body.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Maximum length of the upstream diagnostic body carried in a failure.
pub const MAX_DETAILS_LEN: usize = 200;

/// Classified relay failure.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Upstream credential missing or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing, empty, or malformed turn list
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream responded with a non-success status
    #[error("Error from upstream completion API (status {status})")]
    Upstream { status: u16, details: String },

    /// Upstream responded successfully but no reply text was present
    #[error("Unable to extract reply from upstream response")]
    Extraction,

    /// The wall-clock bound elapsed before the upstream call completed
    #[error("Request to upstream completion API timed out (>{0}s)")]
    Timeout(u64),

    /// Any other network or parsing failure
    #[error("Internal server error")]
    Transport(String),
}

/// Truncate an upstream diagnostic body to at most [`MAX_DETAILS_LEN`] characters.
pub fn truncate_details(body: &str) -> String {
    body.chars().take(MAX_DETAILS_LEN).collect()
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Extraction => StatusCode::BAD_GATEWAY,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RelayError::Upstream { status, details } => json!({
                "error": "Error from upstream completion API",
                "status": status,
                "details": details,
            }),
            RelayError::Transport(message) => json!({
                "error": "Internal server error",
                "details": message,
            }),
            other => json!({ "error": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
