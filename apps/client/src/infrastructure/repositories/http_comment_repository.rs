use crate::domain::{
    comment::{entity::Comment, repository::CommentRepository},
    shared::{errors::DomainError, ids::EntityId},
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde_json::json;

pub struct HttpCommentRepository {
    pub client: BackendClient,
}

impl HttpCommentRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentRepository for HttpCommentRepository {
    async fn create(&self, post_id: &EntityId, content: &str) -> Result<Comment, DomainError> {
        self.client
            .post_json("/comments/", &json!({ "post_id": post_id, "content": content }))
            .await
    }

    async fn update(&self, comment_id: &EntityId, content: &str) -> Result<(), DomainError> {
        self.client
            .put(&format!("/comments/{}", comment_id), &json!({ "content": content }))
            .await
    }

    async fn delete(&self, comment_id: &EntityId) -> Result<(), DomainError> {
        self.client.delete(&format!("/comments/{}", comment_id)).await
    }

    async fn report(&self, comment_id: &EntityId) -> Result<(), DomainError> {
        self.client
            .post(&format!("/comments/{}/report", comment_id), &json!({}))
            .await
    }
}
