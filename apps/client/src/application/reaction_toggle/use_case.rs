//! Optimistic like/dislike control for one post or comment.
//!
//! Pressing a control updates the displayed [`ReactionState`] at once, then
//! asks the [`ReactionService`] to record it. If the request fails or times
//! out the state is put back exactly as it was and the notifier shows an
//! error. At most one request per instance is in flight; presses made while
//! one is pending are ignored.

use crate::domain::reaction::{
    service::{ReactionService, ReactionTarget, send_reaction},
    state::{ReactionKind, ReactionSnapshot, ReactionState},
};
use crate::domain::shared::errors::DomainError;
use crate::infrastructure::notify::traits::Notifier;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Why a press did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skipped {
    /// A request for this entity has not settled yet.
    InFlight,
    /// The entity is no longer displayed.
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The service accepted the change; the optimistic state is final.
    Confirmed,
    /// The service failed; the previous state was restored.
    RolledBack,
    /// Dropped because another request was still pending.
    Ignored,
    /// The entity was unmounted; the response was discarded.
    Detached,
    /// Fresh server data replaced the state while the request was pending.
    Superseded,
}

struct ToggleInner {
    state: ReactionState,
    in_flight: bool,
    mounted: bool,
    /// Bumped by `refresh` so stale responses can be told apart.
    generation: u64,
}

/// Handle to one displayed entity's reaction controls.
///
/// Clones share the same state, which lets a spawned task settle a request
/// started from the view.
#[derive(Clone)]
pub struct ReactionToggle {
    target: ReactionTarget,
    inner: Arc<Mutex<ToggleInner>>,
    service: Arc<dyn ReactionService>,
    notifier: Arc<dyn Notifier>,
    request_timeout: Duration,
}

impl ReactionToggle {
    pub fn mount(
        target: ReactionTarget,
        snapshot: ReactionSnapshot,
        service: Arc<dyn ReactionService>,
        notifier: Arc<dyn Notifier>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            target,
            inner: Arc::new(Mutex::new(ToggleInner {
                state: ReactionState::from_snapshot(snapshot),
                in_flight: false,
                mounted: true,
                generation: 0,
            })),
            service,
            notifier,
            request_timeout,
        }
    }

    pub fn target(&self) -> &ReactionTarget {
        &self.target
    }

    /// Currently displayed state.
    pub fn state(&self) -> ReactionState {
        self.lock().state
    }

    pub fn is_pending(&self) -> bool {
        self.lock().in_flight
    }

    pub fn is_mounted(&self) -> bool {
        self.lock().mounted
    }

    pub async fn toggle_like(&self) -> ToggleOutcome {
        self.toggle(ReactionKind::Like).await
    }

    pub async fn toggle_dislike(&self) -> ToggleOutcome {
        self.toggle(ReactionKind::Dislike).await
    }

    pub async fn toggle(&self, kind: ReactionKind) -> ToggleOutcome {
        match self.begin(kind) {
            Ok(pending) => pending.settle().await,
            Err(Skipped::InFlight) => ToggleOutcome::Ignored,
            Err(Skipped::Detached) => ToggleOutcome::Detached,
        }
    }

    /// Applies the optimistic update for `kind` and returns the request that
    /// confirms it.
    pub fn begin(&self, kind: ReactionKind) -> Result<PendingToggle, Skipped> {
        let mut inner = self.lock();
        if !inner.mounted {
            return Err(Skipped::Detached);
        }
        if inner.in_flight {
            tracing::debug!(
                entity = %self.target,
                kind = kind.as_str(),
                "reaction request already in flight, ignoring"
            );
            return Err(Skipped::InFlight);
        }

        let previous = inner.state;
        inner.state = previous.apply(kind);
        inner.in_flight = true;

        Ok(PendingToggle {
            toggle: self.clone(),
            kind,
            previous,
            generation: inner.generation,
            settled: false,
        })
    }

    /// Replaces the state with fresh server data. A request still pending
    /// will neither roll back nor notify when it settles.
    pub fn refresh(&self, snapshot: ReactionSnapshot) {
        let mut inner = self.lock();
        inner.state = ReactionState::from_snapshot(snapshot);
        inner.generation += 1;
    }

    /// Detaches the instance from the view. Responses arriving afterwards are
    /// discarded.
    pub fn unmount(&self) {
        self.lock().mounted = false;
    }

    fn lock(&self) -> MutexGuard<'_, ToggleInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A started toggle whose request has not been sent yet.
///
/// Dropping it without calling [`PendingToggle::settle`] restores the
/// previous state silently.
#[must_use = "the optimistic update stays unconfirmed until settled"]
pub struct PendingToggle {
    toggle: ReactionToggle,
    kind: ReactionKind,
    previous: ReactionState,
    generation: u64,
    settled: bool,
}

impl PendingToggle {
    pub fn kind(&self) -> ReactionKind {
        self.kind
    }

    /// State displayed before the press.
    pub fn previous(&self) -> ReactionState {
        self.previous
    }

    /// Sends the request and reconciles the displayed state with its result.
    pub async fn settle(mut self) -> ToggleOutcome {
        let toggle = self.toggle.clone();
        let previously_active = self.previous.is_active(self.kind);

        let result = match tokio::time::timeout(
            toggle.request_timeout,
            send_reaction(
                toggle.service.as_ref(),
                &toggle.target,
                self.kind,
                previously_active,
            ),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::Timeout),
        };

        self.settled = true;
        let mut inner = toggle.lock();
        inner.in_flight = false;

        if !inner.mounted {
            tracing::debug!(entity = %toggle.target, "response after unmount discarded");
            return ToggleOutcome::Detached;
        }
        if inner.generation != self.generation {
            tracing::debug!(entity = %toggle.target, "response superseded by refresh");
            return ToggleOutcome::Superseded;
        }

        match result {
            Ok(()) => ToggleOutcome::Confirmed,
            Err(err) => {
                inner.state = self.previous;
                drop(inner);
                tracing::warn!(
                    entity = %toggle.target,
                    kind = self.kind.as_str(),
                    error = %err,
                    "reaction rejected, rolled back"
                );
                toggle
                    .notifier
                    .show_error(&err.user_message(fallback_message(self.kind)));
                ToggleOutcome::RolledBack
            }
        }
    }
}

impl Drop for PendingToggle {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut inner = self.toggle.lock();
        inner.in_flight = false;
        if inner.mounted && inner.generation == self.generation {
            inner.state = self.previous;
        }
    }
}

pub fn fallback_message(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "An error occurred while liking.",
        ReactionKind::Dislike => "An error occurred while disliking.",
    }
}

/// Collaborators shared by every toggle a view mounts.
#[derive(Clone)]
pub struct ReactionFactory {
    pub service: Arc<dyn ReactionService>,
    pub notifier: Arc<dyn Notifier>,
    pub request_timeout: Duration,
}

impl ReactionFactory {
    pub fn mount(&self, target: ReactionTarget, snapshot: ReactionSnapshot) -> ReactionToggle {
        ReactionToggle::mount(
            target,
            snapshot,
            self.service.clone(),
            self.notifier.clone(),
            self.request_timeout,
        )
    }
}
