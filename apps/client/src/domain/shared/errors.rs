use thiserror::Error;

/// Failure of a backend call or a local precondition.
///
/// Every variant is recoverable: view models catch it, surface
/// [`DomainError::user_message`] through the notifier and keep their last
/// known-good state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Service error (status {status:?}): {}", .message.as_deref().unwrap_or("no message"))]
    Service {
        status: Option<u16>,
        message: Option<String>,
    },
    #[error("Request timed out")]
    Timeout,
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    /// Message supplied by the backend, when it sent one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Service { message, .. } => message.as_deref(),
            Self::NotFound(msg) | Self::Forbidden(msg) | Self::ValidationError(msg) => {
                Some(msg.as_str()).filter(|m| !m.is_empty())
            }
            _ => None,
        }
    }

    /// User-facing text, preferring the backend message and falling back to
    /// `fallback` when there is none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized => "You must be logged in to do that.".to_string(),
            Self::Timeout => format!("{} The server took too long to respond.", fallback),
            _ => self
                .service_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(err.to_string())
    }
}
