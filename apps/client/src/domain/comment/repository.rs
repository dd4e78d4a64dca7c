use super::entity::Comment;
use crate::domain::shared::{errors::DomainError, ids::EntityId};
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, post_id: &EntityId, content: &str) -> Result<Comment, DomainError>;
    async fn update(&self, comment_id: &EntityId, content: &str) -> Result<(), DomainError>;
    async fn delete(&self, comment_id: &EntityId) -> Result<(), DomainError>;
    async fn report(&self, comment_id: &EntityId) -> Result<(), DomainError>;
}
