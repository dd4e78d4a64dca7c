//! Mapping of transport failures and non-success responses onto
//! [`DomainError`].
//!
//! The backend answers failures with a JSON body carrying either an `error`
//! or a `message` field. That text is kept so it can be shown to the user,
//! unless it is the backend's catch-all text, in which case the caller's own
//! fallback is shown. Everything else about the failure is only logged.

use crate::domain::shared::errors::DomainError;
use http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Text the backend sends when it has nothing specific to say.
const GENERIC_BACKEND_MESSAGE: &str = "An error occurred";

/// Extracts the user-facing message from an error body, if it has one.
pub fn message_from_body(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty() && !is_generic(m))
}

fn is_generic(message: &str) -> bool {
    message
        .trim_end_matches('.')
        .eq_ignore_ascii_case(GENERIC_BACKEND_MESSAGE)
}

/// Classifies a non-success response.
pub fn error_from_status(status: StatusCode, body: &str) -> DomainError {
    let message = message_from_body(body);
    match status {
        StatusCode::UNAUTHORIZED => {
            tracing::debug!(status = status.as_u16(), "backend rejected session");
            DomainError::Unauthorized
        }
        StatusCode::FORBIDDEN => {
            tracing::warn!(status = status.as_u16(), ?message);
            DomainError::Forbidden(message.unwrap_or_default())
        }
        StatusCode::NOT_FOUND => {
            tracing::warn!(status = status.as_u16(), ?message);
            DomainError::NotFound(message.unwrap_or_default())
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            tracing::warn!(status = status.as_u16(), ?message);
            DomainError::ValidationError(message.unwrap_or_default())
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            tracing::warn!(status = status.as_u16(), "backend timed out");
            DomainError::Timeout
        }
        _ => {
            tracing::error!(status = status.as_u16(), ?message, "backend request failed");
            DomainError::Service {
                status: Some(status.as_u16()),
                message,
            }
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!(reqwest_timeout = %err);
            DomainError::Timeout
        } else if err.is_connect() {
            tracing::warn!(reqwest_connect = %err);
            DomainError::InfrastructureError("Connection failed".into())
        } else if err.is_decode() {
            tracing::error!(reqwest_decode = %err);
            DomainError::InfrastructureError("Unexpected response from server".into())
        } else if err.is_builder() || err.is_request() {
            tracing::warn!(reqwest_request = %err);
            DomainError::InfrastructureError("Invalid request".into())
        } else if let Some(status) = err.status() {
            tracing::info!(reqwest_status = %err);
            DomainError::Service {
                status: Some(status.as_u16()),
                message: None,
            }
        } else {
            tracing::error!(reqwest_error = %err);
            DomainError::InfrastructureError("Server unavailable".into())
        }
    }
}
