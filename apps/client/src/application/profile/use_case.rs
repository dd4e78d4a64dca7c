use crate::application::{
    errors::surface,
    feed::use_case::{FeedSource, PostFeed},
    reaction_toggle::use_case::ReactionFactory,
};
use crate::domain::{
    movie::value_objects::MovieRef,
    post::repository::PostRepository,
    shared::errors::DomainError,
    user::{
        entity::{Profile, SessionContext},
        permissions::can_follow,
        repository::ProfileRepository,
    },
};
use crate::infrastructure::notify::traits::Notifier;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Posts,
    Watchlist,
    Watched,
}

/// A user's profile page: header, follow control, and the three tabs.
pub struct ProfilePage {
    profiles: Arc<dyn ProfileRepository>,
    posts: Arc<dyn PostRepository>,
    reactions: ReactionFactory,
    notifier: Arc<dyn Notifier>,
    session: SessionContext,
    username: String,
    profile: Option<Profile>,
    feed: Option<PostFeed>,
    tab: ProfileTab,
}

impl ProfilePage {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        posts: Arc<dyn PostRepository>,
        reactions: ReactionFactory,
        session: SessionContext,
        username: impl Into<String>,
    ) -> Self {
        Self {
            profiles,
            posts,
            notifier: reactions.notifier.clone(),
            reactions,
            session,
            username: username.into(),
            profile: None,
            feed: None,
            tab: ProfileTab::default(),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn posts(&self) -> Option<&PostFeed> {
        self.feed.as_ref()
    }

    pub fn posts_mut(&mut self) -> Option<&mut PostFeed> {
        self.feed.as_mut()
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Movies listed under the active tab; empty on the posts tab.
    pub fn movies(&self) -> &[MovieRef] {
        match (&self.profile, self.tab) {
            (Some(p), ProfileTab::Watchlist) => &p.watchlist,
            (Some(p), ProfileTab::Watched) => &p.watched,
            _ => &[],
        }
    }

    pub async fn load(&mut self) -> Result<(), DomainError> {
        let profile = self
            .profiles
            .get_profile(&self.username)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load this profile."))?;

        self.feed = match &profile.id {
            Some(user_id) => {
                let mut feed = PostFeed::new(
                    self.posts.clone(),
                    self.profiles.clone(),
                    self.reactions.clone(),
                    self.session.clone(),
                    FeedSource::User(user_id.clone()),
                );
                feed.load().await?;
                Some(feed)
            }
            None => None,
        };
        self.profile = Some(profile);
        Ok(())
    }

    pub fn is_own_profile(&self) -> bool {
        match (self.session.viewer(), &self.profile) {
            (Some(viewer), Some(profile)) => viewer.username == profile.username,
            _ => false,
        }
    }

    pub fn shows_follow_button(&self) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|p| can_follow(&p.summary(), &self.session))
    }

    pub fn is_following(&self) -> bool {
        match (self.session.viewer_id(), &self.profile) {
            (Some(viewer_id), Some(profile)) => profile.followers.contains(viewer_id),
            _ => false,
        }
    }

    pub fn follower_count(&self) -> usize {
        self.profile.as_ref().map_or(0, |p| p.followers.len())
    }

    /// Follows or unfollows the profile owner, updating the follower list
    /// once the backend confirms.
    pub async fn toggle_follow(&mut self) -> Result<(), DomainError> {
        let notifier = self.notifier.clone();
        let fallback = "An error occurred while updating follow status.";
        if !self.shows_follow_button() {
            return Err(DomainError::Forbidden("Cannot follow this user".into()));
        }
        let (Some(owner_id), Some(viewer_id)) = (
            self.profile.as_ref().and_then(|p| p.id.clone()),
            self.session.viewer_id().cloned(),
        ) else {
            return Err(surface(
                notifier.as_ref(),
                DomainError::ValidationError("Missing user id".into()),
                fallback,
            ));
        };

        let following = self.is_following();
        let result = if following {
            self.profiles.unfollow(&owner_id).await
        } else {
            self.profiles.follow(&owner_id).await
        };
        result.map_err(|e| surface(notifier.as_ref(), e, fallback))?;

        if let Some(profile) = self.profile.as_mut() {
            if following {
                profile.followers.retain(|id| id != &viewer_id);
            } else {
                profile.followers.push(viewer_id);
            }
        }
        Ok(())
    }

    pub async fn add_to_watchlist(&mut self, movie: MovieRef) -> Result<(), DomainError> {
        self.ensure_own_profile()?;
        self.profiles
            .add_to_watchlist(movie.id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not add to watchlist."))?;
        if let Some(profile) = self.profile.as_mut() {
            if !profile.watchlist.iter().any(|m| m.id == movie.id) {
                profile.watchlist.push(movie);
            }
        }
        Ok(())
    }

    pub async fn remove_from_watchlist(&mut self, movie_id: i64) -> Result<(), DomainError> {
        self.ensure_own_profile()?;
        self.profiles
            .remove_from_watchlist(movie_id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not remove from watchlist."))?;
        if let Some(profile) = self.profile.as_mut() {
            profile.watchlist.retain(|m| m.id != movie_id);
        }
        Ok(())
    }

    pub async fn add_to_watched(&mut self, movie: MovieRef) -> Result<(), DomainError> {
        self.ensure_own_profile()?;
        self.profiles
            .add_to_watched(movie.id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not mark as watched."))?;
        if let Some(profile) = self.profile.as_mut() {
            if !profile.watched.iter().any(|m| m.id == movie.id) {
                profile.watched.push(movie);
            }
        }
        Ok(())
    }

    pub async fn remove_from_watched(&mut self, movie_id: i64) -> Result<(), DomainError> {
        self.ensure_own_profile()?;
        self.profiles
            .remove_from_watched(movie_id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not remove from watched."))?;
        if let Some(profile) = self.profile.as_mut() {
            profile.watched.retain(|m| m.id != movie_id);
        }
        Ok(())
    }

    fn ensure_own_profile(&self) -> Result<(), DomainError> {
        if self.is_own_profile() {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "Lists can only be changed on your own profile".into(),
            ))
        }
    }
}
