use crate::domain::{movie::value_objects::MovieRef, shared::ids::EntityId};
use serde::{Deserialize, Serialize};

/// Public part of a user's profile embedded in posts and comments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Author of a post or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub username: String,
    #[serde(default)]
    pub profile: ProfileSummary,
}

impl UserSummary {
    /// `First Last`, or `@username` when the profile has no name.
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.profile.first_name.trim(),
            self.profile.last_name.trim()
        );
        let full = full.trim();
        if full.is_empty() {
            format!("@{}", self.username)
        } else {
            full.to_string()
        }
    }
}

/// The authenticated viewer as reported by `GET /auth/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<EntityId>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Viewer context handed to every view model that makes ownership or
/// privilege decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user: Option<CurrentUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn viewer(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn viewer_id(&self) -> Option<&EntityId> {
        self.user.as_ref().and_then(|u| u.id.as_ref())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Full profile page data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: Vec<EntityId>,
    #[serde(default)]
    pub following: Vec<EntityId>,
    #[serde(default)]
    pub watchlist: Vec<MovieRef>,
    #[serde(default)]
    pub watched: Vec<MovieRef>,
}

impl Profile {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
            profile: ProfileSummary {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
                avatar: self.avatar.clone(),
            },
        }
    }
}

/// Row of the admin user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUserRow {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}
