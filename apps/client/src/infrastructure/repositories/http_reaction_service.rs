use crate::domain::{
    reaction::service::{ReactionService, ReactionTarget},
    shared::errors::DomainError,
};
use crate::infrastructure::http::client::BackendClient;
use async_trait::async_trait;
use serde_json::json;

pub struct HttpReactionService {
    pub client: BackendClient,
}

impl HttpReactionService {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReactionService for HttpReactionService {
    async fn set_like_status(
        &self,
        target: &ReactionTarget,
        previously_liked: bool,
    ) -> Result<(), DomainError> {
        let path = format!("/{}/{}/like", target.kind.collection(), target.id);
        self.client
            .post(&path, &json!({ "is_liked": previously_liked }))
            .await
    }

    async fn set_dislike_status(
        &self,
        target: &ReactionTarget,
        previously_disliked: bool,
    ) -> Result<(), DomainError> {
        let path = format!("/{}/{}/dislike", target.kind.collection(), target.id);
        self.client
            .post(&path, &json!({ "is_disliked": previously_disliked }))
            .await
    }
}
