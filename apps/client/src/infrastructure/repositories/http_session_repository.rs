use crate::domain::{
    shared::errors::DomainError,
    user::{entity::CurrentUser, repository::SessionRepository},
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct UserEnvelope {
    user: CurrentUser,
}

pub struct HttpSessionRepository {
    pub client: BackendClient,
}

impl HttpSessionRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionRepository for HttpSessionRepository {
    async fn login(&self, email: &str, password: &str) -> Result<(), DomainError> {
        self.client
            .post("/auth/login", &json!({ "email": email, "password": password }))
            .await
    }

    async fn signup(&self, username: &str, email: &str, password: &str) -> Result<(), DomainError> {
        self.client
            .post(
                "/auth/signup",
                &json!({ "username": username, "email": email, "password": password }),
            )
            .await
    }

    async fn logout(&self) -> Result<(), DomainError> {
        self.client.post("/auth/logout", &json!({})).await
    }

    async fn current_user(&self) -> Result<Option<CurrentUser>, DomainError> {
        match self.client.get_json::<UserEnvelope>("/auth/user").await {
            Ok(envelope) => Ok(Some(envelope.user)),
            Err(DomainError::Unauthorized) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
