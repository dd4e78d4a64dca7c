use crate::domain::{
    reaction::state::ReactionSnapshot,
    shared::ids::EntityId,
    user::entity::UserSummary,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    #[serde(default)]
    pub post_id: Option<EntityId>,
    pub user: UserSummary,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
    #[serde(default)]
    pub liked_by: Vec<EntityId>,
    #[serde(default)]
    pub disliked_by: Vec<EntityId>,
    pub content: String,
}

impl Comment {
    /// Reaction snapshot as seen by `viewer`.
    pub fn reaction_snapshot(&self, viewer: Option<&EntityId>) -> ReactionSnapshot {
        ReactionSnapshot {
            liked: viewer.is_some_and(|id| self.liked_by.contains(id)),
            disliked: viewer.is_some_and(|id| self.disliked_by.contains(id)),
            likes: self.likes,
            dislikes: self.dislikes,
        }
    }
}
