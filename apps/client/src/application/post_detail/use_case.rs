use super::dto::CommentCard;
use crate::application::{
    errors::surface, feed::dto::PostCard, reaction_toggle::use_case::ReactionFactory,
};
use crate::domain::{
    comment::{entity::Comment, repository::CommentRepository},
    post::repository::PostRepository,
    reaction::service::ReactionTarget,
    shared::{content::Content, errors::DomainError, ids::EntityId},
    user::{
        entity::SessionContext,
        permissions::{can_delete, can_edit, can_report},
    },
};
use crate::infrastructure::notify::traits::Notifier;
use std::sync::Arc;

/// A single post with its comment thread.
pub struct PostDetail {
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    reactions: ReactionFactory,
    notifier: Arc<dyn Notifier>,
    session: SessionContext,
    post_id: EntityId,
    card: Option<PostCard>,
    thread: Vec<CommentCard>,
}

impl PostDetail {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
        reactions: ReactionFactory,
        session: SessionContext,
        post_id: EntityId,
    ) -> Self {
        Self {
            posts,
            comments,
            notifier: reactions.notifier.clone(),
            reactions,
            session,
            post_id,
            card: None,
            thread: Vec::new(),
        }
    }

    pub fn post(&self) -> Option<&PostCard> {
        self.card.as_ref()
    }

    pub fn comments(&self) -> &[CommentCard] {
        &self.thread
    }

    pub fn comment(&self, comment_id: &EntityId) -> Option<&CommentCard> {
        self.thread.iter().find(|c| &c.comment.id == comment_id)
    }

    pub async fn load(&mut self) -> Result<(), DomainError> {
        let mut snapshot = self
            .posts
            .get(&self.post_id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load this post."))?;

        self.unmount_all();
        let comments = snapshot.comments.take().unwrap_or_default();
        let created = snapshot.created_at();
        self.card = Some(PostCard {
            reactions: self.reactions.mount(
                ReactionTarget::post(snapshot.post.id.clone()),
                snapshot.reactions,
            ),
            post: snapshot.post,
            created,
        });
        self.thread = comments.into_iter().map(|c| self.mount_comment(c)).collect();
        Ok(())
    }

    pub async fn add_comment(&mut self, content: &str) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while commenting.";
        if self.session.viewer().is_none() {
            return Err(surface(notifier.as_ref(), DomainError::Unauthorized, fallback));
        }
        let content =
            Content::new(content).map_err(|e| surface(notifier.as_ref(), e.into(), fallback))?;

        let comment = self
            .comments
            .create(&self.post_id, content.as_str())
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        let card = self.mount_comment(comment);
        self.thread.insert(0, card);
        Ok(())
    }

    /// Opens the inline editor. Only the author may edit.
    pub fn begin_edit(&mut self, comment_id: &EntityId) -> Result<(), DomainError> {
        let index = self.index_of(comment_id)?;
        if !can_edit(&self.thread[index].comment.user, &self.session) {
            return Err(DomainError::Forbidden(
                "Only the author can edit this comment".into(),
            ));
        }
        self.thread[index].editing = true;
        Ok(())
    }

    pub fn cancel_edit(&mut self, comment_id: &EntityId) {
        if let Some(card) = self.thread.iter_mut().find(|c| &c.comment.id == comment_id) {
            card.editing = false;
        }
    }

    pub async fn save_edit(&mut self, comment_id: &EntityId, content: &str) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while editing this comment.";
        let index = self.index_of(comment_id)?;
        if !self.thread[index].editing {
            return Err(DomainError::ValidationError(
                "Comment is not being edited".into(),
            ));
        }
        let content =
            Content::new(content).map_err(|e| surface(notifier.as_ref(), e.into(), fallback))?;

        self.comments
            .update(comment_id, content.as_str())
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        let card = &mut self.thread[index];
        card.comment.content = content.value;
        card.editing = false;
        Ok(())
    }

    pub async fn delete_comment(&mut self, comment_id: &EntityId) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while deleting this comment.";
        let index = self.index_of(comment_id)?;
        if !can_delete(&self.thread[index].comment.user, &self.session) {
            return Err(surface(
                notifier.as_ref(),
                DomainError::Forbidden("You cannot delete this comment".into()),
                fallback,
            ));
        }

        self.comments
            .delete(comment_id)
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        let card = self.thread.remove(index);
        card.reactions.unmount();
        Ok(())
    }

    pub async fn report_comment(&mut self, comment_id: &EntityId) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while reporting.";
        if !can_report(&self.session) {
            return Err(surface(notifier.as_ref(), DomainError::Unauthorized, fallback));
        }
        self.comments
            .report(comment_id)
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        tracing::info!(comment_id = %comment_id, "comment reported");
        self.load().await
    }

    fn index_of(&self, comment_id: &EntityId) -> Result<usize, DomainError> {
        self.thread
            .iter()
            .position(|c| &c.comment.id == comment_id)
            .ok_or_else(|| DomainError::NotFound(format!("comment {} not found", comment_id)))
    }

    fn mount_comment(&self, comment: Comment) -> CommentCard {
        let snapshot = comment.reaction_snapshot(self.session.viewer_id());
        CommentCard {
            reactions: self
                .reactions
                .mount(ReactionTarget::comment(comment.id.clone()), snapshot),
            comment,
            editing: false,
        }
    }

    fn unmount_all(&mut self) {
        if let Some(card) = self.card.take() {
            card.reactions.unmount();
        }
        for card in self.thread.drain(..) {
            card.reactions.unmount();
        }
    }
}
