use crate::application::reaction_toggle::use_case::ReactionToggle;
use crate::domain::{comment::entity::Comment, movie::value_objects::avatar_url};

/// One rendered comment under a post.
pub struct CommentCard {
    pub comment: Comment,
    pub reactions: ReactionToggle,
    /// The inline editor is open instead of the comment text.
    pub editing: bool,
}

impl CommentCard {
    pub fn author_name(&self) -> String {
        self.comment.user.display_name()
    }

    pub fn avatar(&self, backend_url: &str) -> String {
        avatar_url(backend_url, self.comment.user.profile.avatar.as_deref())
    }
}
