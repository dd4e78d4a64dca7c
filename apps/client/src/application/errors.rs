use crate::domain::shared::errors::DomainError;
use crate::infrastructure::notify::traits::Notifier;

/// Shows `err` on the notifier and hands it back for the caller's `?`.
pub fn surface(notifier: &dyn Notifier, err: DomainError, fallback: &str) -> DomainError {
    tracing::warn!(error = %err, "{}", fallback);
    notifier.show_error(&err.user_message(fallback));
    err
}
