use crate::domain::{
    post::entity::ReportedPost,
    shared::{errors::DomainError, ids::EntityId},
    user::{entity::AdminUserRow, repository::AdminRepository},
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct UsersEnvelope {
    #[serde(default)]
    users: Option<Vec<AdminUserRow>>,
}

pub struct HttpAdminRepository {
    pub client: BackendClient,
}

impl HttpAdminRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminRepository for HttpAdminRepository {
    async fn reported_posts(&self) -> Result<Vec<ReportedPost>, DomainError> {
        let posts: Option<Vec<ReportedPost>> =
            self.client.get_json("/admin/reports/posts").await?;
        Ok(posts.unwrap_or_default())
    }

    async fn delete_reported_post(&self, post_id: &EntityId) -> Result<(), DomainError> {
        self.client
            .delete(&format!("/admin/reports/posts/{}", post_id))
            .await
    }

    async fn users(&self) -> Result<Vec<AdminUserRow>, DomainError> {
        let envelope: UsersEnvelope = self.client.get_json("/admin/users").await?;
        Ok(envelope.users.unwrap_or_default())
    }

    async fn toggle_admin(&self, user_id: &EntityId) -> Result<(), DomainError> {
        self.client
            .put(&format!("/admin/users/{}", user_id), &json!({}))
            .await
    }
}
