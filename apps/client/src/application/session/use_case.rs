use super::dto::{LoginRequest, SignupRequest};
use crate::application::errors::surface;
use crate::domain::{
    shared::errors::DomainError,
    user::{entity::SessionContext, repository::SessionRepository},
};
use crate::infrastructure::notify::traits::Notifier;
use std::sync::Arc;
use validator::Validate;

const LOGIN_FAILED: &str =
    "An error occurred while logging in. Please check credentials and try again.";
const SIGNUP_FAILED: &str =
    "An error occurred while signing up, please check required fields and try again.";
const LOGOUT_FAILED: &str = "An error occurred while logging out.";

pub struct SessionUseCase {
    repository: Arc<dyn SessionRepository>,
    notifier: Arc<dyn Notifier>,
}

impl SessionUseCase {
    pub fn new(repository: Arc<dyn SessionRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Asks the backend who the session belongs to.
    pub async fn resolve(&self) -> Result<SessionContext, DomainError> {
        let user = self
            .repository
            .current_user()
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load your session."))?;
        match &user {
            Some(u) => tracing::debug!(username = %u.username, is_admin = u.is_admin, "session resolved"),
            None => tracing::debug!("anonymous session"),
        }
        Ok(SessionContext { user })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<SessionContext, DomainError> {
        request
            .validate()
            .map_err(|e| self.reject(e.into(), LOGIN_FAILED))?;
        self.repository
            .login(&request.email, &request.password)
            .await
            .map_err(|e| self.reject(e, LOGIN_FAILED))?;
        self.resolve().await
    }

    /// Creates the account, then signs in with it.
    pub async fn signup(&self, request: SignupRequest) -> Result<SessionContext, DomainError> {
        request
            .validate()
            .map_err(|e| self.reject(e.into(), SIGNUP_FAILED))?;
        self.repository
            .signup(&request.username, &request.email, &request.password)
            .await
            .map_err(|e| self.reject(e, SIGNUP_FAILED))?;
        self.login(LoginRequest {
            email: request.email,
            password: request.password,
        })
        .await
    }

    pub async fn logout(&self) -> Result<SessionContext, DomainError> {
        self.repository
            .logout()
            .await
            .map_err(|e| self.reject(e, LOGOUT_FAILED))?;
        Ok(SessionContext::anonymous())
    }

    fn reject(&self, err: DomainError, fallback: &str) -> DomainError {
        // A 401 here means bad credentials, not a missing session.
        if err == DomainError::Unauthorized {
            tracing::warn!("{}", fallback);
            self.notifier.show_error(fallback);
            return err;
        }
        surface(self.notifier.as_ref(), err, fallback)
    }
}
