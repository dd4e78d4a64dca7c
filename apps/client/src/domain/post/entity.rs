use crate::domain::{
    comment::entity::Comment,
    movie::value_objects::MovieRef,
    reaction::state::ReactionSnapshot,
    shared::ids::EntityId,
    user::entity::UserSummary,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: EntityId,
    pub user: UserSummary,
    pub movie: MovieRef,
    pub content: String,
}

/// A post as listed by the backend, decorated with the viewer's reaction
/// and the aggregate counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSnapshot {
    pub post: Post,
    #[serde(flatten)]
    pub reactions: ReactionSnapshot,
    #[serde(default)]
    pub created: Option<String>,
    /// Only present on the single-post endpoint.
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

impl PostSnapshot {
    /// Snapshot for a post the viewer has just created.
    pub fn fresh(post: Post) -> Self {
        Self {
            post,
            reactions: ReactionSnapshot::default(),
            created: None,
            comments: None,
        }
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, CREATED_FORMAT).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedPost {
    pub id: EntityId,
    #[serde(default)]
    pub report_count: u32,
    pub post: Post,
}
