use crate::application::reaction_toggle::use_case::ReactionToggle;
use crate::domain::{
    movie::value_objects::{avatar_url, poster_url},
    post::entity::Post,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPostRequest {
    pub movie_id: i64,
    pub content: String,
}

/// One rendered post.
pub struct PostCard {
    pub post: Post,
    pub created: Option<NaiveDateTime>,
    pub reactions: ReactionToggle,
}

impl PostCard {
    pub fn author_name(&self) -> String {
        self.post.user.display_name()
    }

    pub fn poster(&self, poster_base_url: &str) -> String {
        poster_url(poster_base_url, self.post.movie.poster_path.as_deref())
    }

    pub fn avatar(&self, backend_url: &str) -> String {
        avatar_url(backend_url, self.post.user.profile.avatar.as_deref())
    }
}
