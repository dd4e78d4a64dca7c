use super::entity::{Post, PostSnapshot};
use crate::domain::shared::{errors::DomainError, ids::EntityId};
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_recent(&self) -> Result<Vec<PostSnapshot>, DomainError>;
    async fn list_by_user(&self, user_id: &EntityId) -> Result<Vec<PostSnapshot>, DomainError>;
    /// Single post including its comments.
    async fn get(&self, post_id: &EntityId) -> Result<PostSnapshot, DomainError>;
    async fn create(&self, movie_id: i64, content: &str) -> Result<Post, DomainError>;
    async fn update(&self, post_id: &EntityId, content: &str) -> Result<(), DomainError>;
    async fn delete(&self, post_id: &EntityId) -> Result<(), DomainError>;
    async fn report(&self, post_id: &EntityId) -> Result<(), DomainError>;
}
