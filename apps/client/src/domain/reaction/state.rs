//! Like/dislike view state for a single post or comment.
//!
//! The state is a pair of mutually exclusive flags plus the two displayed
//! counters. It only changes through [`ReactionState::apply`], which encodes
//! the six legal transitions between `None`, `Liked` and `Disliked`.

use serde::{Deserialize, Serialize};

/// Which control the viewer pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// The viewer's reaction, i.e. the legal `(liked, disliked)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    None,
    Liked,
    Disliked,
}

/// Server-supplied reaction data an entity is mounted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionSnapshot {
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub disliked: bool,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub dislikes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReactionState {
    liked: bool,
    disliked: bool,
    like_count: u32,
    dislike_count: u32,
}

impl ReactionState {
    pub fn new(reaction: Reaction, like_count: u32, dislike_count: u32) -> Self {
        Self {
            liked: reaction == Reaction::Liked,
            disliked: reaction == Reaction::Disliked,
            like_count,
            dislike_count,
        }
    }

    /// Builds the state from a snapshot. A snapshot claiming both flags is
    /// read as a like; negative counters clamp to zero.
    pub fn from_snapshot(snapshot: ReactionSnapshot) -> Self {
        let reaction = match (snapshot.liked, snapshot.disliked) {
            (true, true) => {
                tracing::warn!(
                    likes = snapshot.likes,
                    dislikes = snapshot.dislikes,
                    "snapshot reports both like and dislike, keeping like"
                );
                Reaction::Liked
            }
            (true, false) => Reaction::Liked,
            (false, true) => Reaction::Disliked,
            (false, false) => Reaction::None,
        };
        Self::new(
            reaction,
            clamp_count(snapshot.likes),
            clamp_count(snapshot.dislikes),
        )
    }

    pub fn reaction(&self) -> Reaction {
        match (self.liked, self.disliked) {
            (true, _) => Reaction::Liked,
            (false, true) => Reaction::Disliked,
            (false, false) => Reaction::None,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn disliked(&self) -> bool {
        self.disliked
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn dislike_count(&self) -> u32 {
        self.dislike_count
    }

    /// Whether the flag for `kind` is currently set.
    pub fn is_active(&self, kind: ReactionKind) -> bool {
        match kind {
            ReactionKind::Like => self.liked,
            ReactionKind::Dislike => self.disliked,
        }
    }

    /// State after the viewer presses `kind`.
    pub fn apply(self, kind: ReactionKind) -> Self {
        let mut next = self;
        match (kind, self.reaction()) {
            (ReactionKind::Like, Reaction::Liked) => {
                next.liked = false;
                next.like_count = self.like_count.saturating_sub(1);
            }
            (ReactionKind::Like, previous) => {
                next.like_count = self.like_count.saturating_add(1);
                if previous == Reaction::Disliked {
                    next.dislike_count = self.dislike_count.saturating_sub(1);
                }
                next.liked = true;
                next.disliked = false;
            }
            (ReactionKind::Dislike, Reaction::Disliked) => {
                next.disliked = false;
                next.dislike_count = self.dislike_count.saturating_sub(1);
            }
            (ReactionKind::Dislike, previous) => {
                next.dislike_count = self.dislike_count.saturating_add(1);
                if previous == Reaction::Liked {
                    next.like_count = self.like_count.saturating_sub(1);
                }
                next.disliked = true;
                next.liked = false;
            }
        }
        next
    }
}

fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
