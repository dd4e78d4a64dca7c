use super::dto::{NewPostRequest, PostCard};
use crate::application::{errors::surface, reaction_toggle::use_case::ReactionFactory};
use crate::domain::{
    post::{entity::PostSnapshot, repository::PostRepository},
    reaction::service::ReactionTarget,
    shared::{content::Content, errors::DomainError, ids::EntityId},
    user::{
        entity::SessionContext,
        permissions::{can_delete, can_edit, can_report},
        repository::ProfileRepository,
    },
};
use crate::infrastructure::notify::traits::Notifier;
use std::sync::Arc;

/// Which list of posts the feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Home,
    User(EntityId),
}

/// A list of post cards, each with its own reaction controls.
///
/// Mutations are reflected locally: a deleted post leaves the list, an
/// edited post is updated in place and a report re-fetches the list.
pub struct PostFeed {
    posts: Arc<dyn PostRepository>,
    profiles: Arc<dyn ProfileRepository>,
    reactions: ReactionFactory,
    notifier: Arc<dyn Notifier>,
    session: SessionContext,
    source: FeedSource,
    cards: Vec<PostCard>,
}

impl PostFeed {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        profiles: Arc<dyn ProfileRepository>,
        reactions: ReactionFactory,
        session: SessionContext,
        source: FeedSource,
    ) -> Self {
        Self {
            posts,
            profiles,
            notifier: reactions.notifier.clone(),
            reactions,
            session,
            source,
            cards: Vec::new(),
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn card(&self, post_id: &EntityId) -> Option<&PostCard> {
        self.cards.iter().find(|c| &c.post.id == post_id)
    }

    pub async fn load(&mut self) -> Result<(), DomainError> {
        let fetched = match &self.source {
            FeedSource::Home => self.posts.list_recent().await,
            FeedSource::User(user_id) => self.posts.list_by_user(user_id).await,
        };
        let snapshots =
            fetched.map_err(|e| surface(self.notifier.as_ref(), e, "Could not load posts."))?;

        for card in self.cards.drain(..) {
            card.reactions.unmount();
        }
        self.cards = snapshots.into_iter().map(|s| self.mount_card(s)).collect();
        tracing::debug!(count = self.cards.len(), source = ?self.source, "feed loaded");
        Ok(())
    }

    /// Publishes a post and records the movie as watched.
    pub async fn create(&mut self, request: NewPostRequest) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while creating the post.";
        if self.session.viewer().is_none() {
            return Err(surface(notifier.as_ref(), DomainError::Unauthorized, fallback));
        }
        let content = Content::new(&request.content)
            .map_err(|e| surface(notifier.as_ref(), e.into(), fallback))?;

        let post = self
            .posts
            .create(request.movie_id, content.as_str())
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;

        if let Err(e) = self.profiles.add_to_watched(request.movie_id).await {
            tracing::warn!(movie_id = request.movie_id, error = %e, "could not mark movie as watched");
        }

        let shows_viewer_posts = match &self.source {
            FeedSource::Home => true,
            FeedSource::User(user_id) => self.session.viewer_id() == Some(user_id),
        };
        if shows_viewer_posts {
            let card = self.mount_card(PostSnapshot::fresh(post));
            self.cards.insert(0, card);
        }
        Ok(())
    }

    pub async fn edit(&mut self, post_id: &EntityId, content: &str) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while editing the post.";
        let index = self.index_of(post_id)?;
        if !can_edit(&self.cards[index].post.user, &self.session) {
            return Err(surface(
                notifier.as_ref(),
                DomainError::Forbidden("Only the author can edit this post".into()),
                fallback,
            ));
        }
        let content =
            Content::new(content).map_err(|e| surface(notifier.as_ref(), e.into(), fallback))?;

        self.posts
            .update(post_id, content.as_str())
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        self.cards[index].post.content = content.value;
        Ok(())
    }

    pub async fn delete(&mut self, post_id: &EntityId) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while deleting this post.";
        let index = self.index_of(post_id)?;
        if !can_delete(&self.cards[index].post.user, &self.session) {
            return Err(surface(
                notifier.as_ref(),
                DomainError::Forbidden("You cannot delete this post".into()),
                fallback,
            ));
        }

        self.posts
            .delete(post_id)
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        let card = self.cards.remove(index);
        card.reactions.unmount();
        Ok(())
    }

    /// Reports a post, then re-fetches the list so moderation applied by the
    /// backend is visible.
    pub async fn report(&mut self, post_id: &EntityId) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while reporting.";
        if !can_report(&self.session) {
            return Err(surface(notifier.as_ref(), DomainError::Unauthorized, fallback));
        }
        self.posts
            .report(post_id)
            .await
            .map_err(|e| surface(notifier.as_ref(), e, fallback))?;
        tracing::info!(post_id = %post_id, "post reported");
        self.load().await
    }

    fn index_of(&self, post_id: &EntityId) -> Result<usize, DomainError> {
        self.cards
            .iter()
            .position(|c| &c.post.id == post_id)
            .ok_or_else(|| DomainError::NotFound(format!("post {} is not in this feed", post_id)))
    }

    fn mount_card(&self, snapshot: PostSnapshot) -> PostCard {
        let created = snapshot.created_at();
        let reactions = self
            .reactions
            .mount(ReactionTarget::post(snapshot.post.id.clone()), snapshot.reactions);
        PostCard {
            post: snapshot.post,
            created,
            reactions,
        }
    }
}
