use crate::domain::{
    shared::{errors::DomainError, ids::EntityId},
    user::{entity::Profile, repository::ProfileRepository},
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile: Profile,
}

pub struct HttpProfileRepository {
    pub client: BackendClient,
}

impl HttpProfileRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn get_profile(&self, username: &str) -> Result<Profile, DomainError> {
        let envelope: ProfileEnvelope = self
            .client
            .get_json(&format!("/profile/{}", username))
            .await?;
        Ok(envelope.profile)
    }

    async fn follow(&self, user_id: &EntityId) -> Result<(), DomainError> {
        self.client
            .post(&format!("/follow/{}", user_id), &json!({}))
            .await
    }

    async fn unfollow(&self, user_id: &EntityId) -> Result<(), DomainError> {
        self.client.delete(&format!("/follow/{}", user_id)).await
    }

    async fn add_to_watchlist(&self, movie_id: i64) -> Result<(), DomainError> {
        // The backend expects the movie id as a string.
        self.client
            .post(
                "/profile/movies/add/watchlist",
                &json!({ "movieId": movie_id.to_string() }),
            )
            .await
    }

    async fn remove_from_watchlist(&self, movie_id: i64) -> Result<(), DomainError> {
        self.client
            .delete(&format!("/profile/movies/watchlist/{}", movie_id))
            .await
    }

    async fn add_to_watched(&self, movie_id: i64) -> Result<(), DomainError> {
        self.client
            .post(
                "/profile/movies/add/watched",
                &json!({ "movieId": movie_id.to_string() }),
            )
            .await
    }

    async fn remove_from_watched(&self, movie_id: i64) -> Result<(), DomainError> {
        self.client
            .delete(&format!("/profile/movies/watched/{}", movie_id))
            .await
    }
}
