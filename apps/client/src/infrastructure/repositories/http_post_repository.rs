use crate::domain::{
    post::{
        entity::{Post, PostSnapshot},
        repository::PostRepository,
    },
    shared::{errors::DomainError, ids::EntityId},
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde_json::json;

pub struct HttpPostRepository {
    pub client: BackendClient,
}

impl HttpPostRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn list_recent(&self) -> Result<Vec<PostSnapshot>, DomainError> {
        // The backend encodes an empty feed as `null`.
        let posts: Option<Vec<PostSnapshot>> = self.client.get_json("/posts/").await?;
        Ok(posts.unwrap_or_default())
    }

    async fn list_by_user(&self, user_id: &EntityId) -> Result<Vec<PostSnapshot>, DomainError> {
        let posts: Option<Vec<PostSnapshot>> = self
            .client
            .get_json(&format!("/posts/user/{}", user_id))
            .await?;
        Ok(posts.unwrap_or_default())
    }

    async fn get(&self, post_id: &EntityId) -> Result<PostSnapshot, DomainError> {
        self.client.get_json(&format!("/posts/{}", post_id)).await
    }

    async fn create(&self, movie_id: i64, content: &str) -> Result<Post, DomainError> {
        self.client
            .post_json("/posts/", &json!({ "movie_id": movie_id, "content": content }))
            .await
    }

    async fn update(&self, post_id: &EntityId, content: &str) -> Result<(), DomainError> {
        self.client
            .put(&format!("/posts/{}", post_id), &json!({ "content": content }))
            .await
    }

    async fn delete(&self, post_id: &EntityId) -> Result<(), DomainError> {
        self.client.delete(&format!("/posts/{}", post_id)).await
    }

    async fn report(&self, post_id: &EntityId) -> Result<(), DomainError> {
        self.client
            .post(&format!("/posts/{}/report", post_id), &json!({}))
            .await
    }
}
