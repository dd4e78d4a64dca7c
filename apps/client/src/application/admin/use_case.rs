use crate::application::errors::surface;
use crate::domain::{
    post::entity::ReportedPost,
    shared::{errors::DomainError, ids::EntityId},
    user::{
        entity::{AdminUserRow, SessionContext},
        permissions::can_moderate,
        repository::AdminRepository,
    },
};
use crate::infrastructure::notify::traits::Notifier;
use futures_util::future::try_join;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    ReportedPosts,
    Users,
}

/// Moderation view: reported posts and user privileges.
pub struct AdminConsole {
    repository: Arc<dyn AdminRepository>,
    notifier: Arc<dyn Notifier>,
    tab: AdminTab,
    reported: Vec<ReportedPost>,
    users: Vec<AdminUserRow>,
}

impl AdminConsole {
    /// Opens the console. Non-admin viewers are refused.
    pub fn open(
        repository: Arc<dyn AdminRepository>,
        notifier: Arc<dyn Notifier>,
        session: &SessionContext,
    ) -> Result<Self, DomainError> {
        if !can_moderate(session) {
            tracing::warn!(viewer = ?session.viewer().map(|u| &u.username), "admin console refused");
            return Err(DomainError::Forbidden("Admin access required".into()));
        }
        Ok(Self {
            repository,
            notifier,
            tab: AdminTab::default(),
            reported: Vec::new(),
            users: Vec::new(),
        })
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn reported_posts(&self) -> &[ReportedPost] {
        &self.reported
    }

    pub fn users(&self) -> &[AdminUserRow] {
        &self.users
    }

    /// Fetches both tabs at once.
    pub async fn load(&mut self) -> Result<(), DomainError> {
        let (reported, users) = try_join(self.repository.reported_posts(), self.repository.users())
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load the admin console."))?;
        self.set_reported(reported);
        self.users = users;
        tracing::debug!(
            reported = self.reported.len(),
            users = self.users.len(),
            "admin console loaded"
        );
        Ok(())
    }

    pub async fn load_reported_posts(&mut self) -> Result<(), DomainError> {
        let reported = self
            .repository
            .reported_posts()
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load reported posts."))?;
        self.set_reported(reported);
        Ok(())
    }

    pub async fn delete_reported_post(&mut self, post_id: &EntityId) -> Result<(), DomainError> {
        self.repository
            .delete_reported_post(post_id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Failed to delete post."))?;
        self.reported
            .retain(|r| &r.id != post_id && &r.post.id != post_id);
        tracing::info!(post_id = %post_id, "reported post deleted");
        Ok(())
    }

    pub async fn load_users(&mut self) -> Result<(), DomainError> {
        self.users = self
            .repository
            .users()
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Could not load users."))?;
        Ok(())
    }

    pub async fn toggle_admin(&mut self, user_id: &EntityId) -> Result<(), DomainError> {
        self.repository
            .toggle_admin(user_id)
            .await
            .map_err(|e| surface(self.notifier.as_ref(), e, "Failed to update admin status."))?;
        if let Some(row) = self.users.iter_mut().find(|u| &u.id == user_id) {
            row.is_admin = !row.is_admin;
            tracing::info!(user_id = %user_id, is_admin = row.is_admin, "admin status toggled");
        }
        Ok(())
    }

    /// Most reported first.
    fn set_reported(&mut self, mut reported: Vec<ReportedPost>) {
        reported.sort_by(|a, b| b.report_count.cmp(&a.report_count));
        self.reported = reported;
    }
}
