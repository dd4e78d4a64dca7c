use super::state::ReactionKind;
use crate::domain::shared::{errors::DomainError, ids::EntityId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of likeable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Post,
    Comment,
}

impl EntityKind {
    /// Backend collection the entity lives under.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Post => "posts",
            Self::Comment => "comments",
        }
    }
}

/// The entity a reaction is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReactionTarget {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl ReactionTarget {
    pub fn post(id: impl Into<EntityId>) -> Self {
        Self {
            kind: EntityKind::Post,
            id: id.into(),
        }
    }

    pub fn comment(id: impl Into<EntityId>) -> Self {
        Self {
            kind: EntityKind::Comment,
            id: id.into(),
        }
    }
}

impl fmt::Display for ReactionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.collection(), self.id)
    }
}

/// Remote endpoint that records the viewer's reaction.
///
/// Both calls carry the flag value the viewer held *before* pressing the
/// control; the backend toggles relative to that.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionService: Send + Sync {
    async fn set_like_status(
        &self,
        target: &ReactionTarget,
        previously_liked: bool,
    ) -> Result<(), DomainError>;

    async fn set_dislike_status(
        &self,
        target: &ReactionTarget,
        previously_disliked: bool,
    ) -> Result<(), DomainError>;
}

/// Routes a toggle of `kind` to the matching service call.
pub async fn send_reaction(
    service: &dyn ReactionService,
    target: &ReactionTarget,
    kind: ReactionKind,
    previous: bool,
) -> Result<(), DomainError> {
    match kind {
        ReactionKind::Like => service.set_like_status(target, previous).await,
        ReactionKind::Dislike => service.set_dislike_status(target, previous).await,
    }
}
