use super::entity::{AdminUserRow, CurrentUser, Profile};
use crate::domain::{
    post::entity::ReportedPost,
    shared::{errors::DomainError, ids::EntityId},
};
use async_trait::async_trait;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<(), DomainError>;
    async fn signup(&self, username: &str, email: &str, password: &str)
    -> Result<(), DomainError>;
    async fn logout(&self) -> Result<(), DomainError>;
    /// `None` when the backend does not recognise the session.
    async fn current_user(&self) -> Result<Option<CurrentUser>, DomainError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, username: &str) -> Result<Profile, DomainError>;
    async fn follow(&self, user_id: &EntityId) -> Result<(), DomainError>;
    async fn unfollow(&self, user_id: &EntityId) -> Result<(), DomainError>;
    async fn add_to_watchlist(&self, movie_id: i64) -> Result<(), DomainError>;
    async fn remove_from_watchlist(&self, movie_id: i64) -> Result<(), DomainError>;
    async fn add_to_watched(&self, movie_id: i64) -> Result<(), DomainError>;
    async fn remove_from_watched(&self, movie_id: i64) -> Result<(), DomainError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn reported_posts(&self) -> Result<Vec<ReportedPost>, DomainError>;
    async fn delete_reported_post(&self, post_id: &EntityId) -> Result<(), DomainError>;
    async fn users(&self) -> Result<Vec<AdminUserRow>, DomainError>;
    async fn toggle_admin(&self, user_id: &EntityId) -> Result<(), DomainError>;
}
