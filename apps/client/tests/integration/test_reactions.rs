use super::helpers::{StubBackend, comment, post_snapshot, spawn_app, user};
use client::{
    application::{
        feed::use_case::FeedSource,
        reaction_toggle::use_case::{Skipped, ToggleOutcome},
    },
    domain::{
        reaction::state::{Reaction, ReactionKind},
        shared::ids::EntityId,
        user::entity::SessionContext,
    },
};
use serde_json::json;

#[tokio::test]
async fn like_then_dislike_is_recorded_and_displayed() {
    let app = spawn_app(StubBackend::with_posts(vec![post_snapshot(
        "p1",
        user("u2", "bob"),
        3,
        1,
    )]))
    .await;
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = feed
        .card(&EntityId::from("p1"))
        .expect("p1 should be listed")
        .reactions
        .clone();

    let pending = toggle.begin(ReactionKind::Like).expect("like should start");
    let shown = toggle.state();
    assert_eq!(shown.reaction(), Reaction::Liked);
    assert_eq!((shown.like_count(), shown.dislike_count()), (4, 1));
    assert_eq!(pending.settle().await, ToggleOutcome::Confirmed);

    assert_eq!(toggle.toggle_dislike().await, ToggleOutcome::Confirmed);
    let shown = toggle.state();
    assert_eq!(shown.reaction(), Reaction::Disliked);
    assert_eq!((shown.like_count(), shown.dislike_count()), (3, 2));

    assert_eq!(
        app.backend.reaction_calls(),
        vec![
            ("/posts/p1/like".to_string(), json!({ "is_liked": false })),
            ("/posts/p1/dislike".to_string(), json!({ "is_disliked": false })),
        ]
    );
    assert_eq!(app.state.notifier.visible(), None);
}

#[tokio::test]
async fn unliking_reports_previous_like() {
    let mut liked = post_snapshot("p1", user("u2", "bob"), 5, 0);
    liked["liked"] = json!(true);
    let app = spawn_app(StubBackend::with_posts(vec![liked])).await;
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = &feed.cards()[0].reactions;

    assert_eq!(toggle.toggle_like().await, ToggleOutcome::Confirmed);
    assert_eq!(toggle.state().reaction(), Reaction::None);
    assert_eq!(toggle.state().like_count(), 4);
    assert_eq!(
        app.backend.reaction_calls(),
        vec![("/posts/p1/like".to_string(), json!({ "is_liked": true }))]
    );
}

#[tokio::test]
async fn failed_like_rolls_back_and_shows_backend_message() {
    let app = spawn_app(StubBackend::with_posts(vec![post_snapshot(
        "p1",
        user("u2", "bob"),
        3,
        1,
    )]))
    .await;
    app.backend.fail_reactions(json!({ "message": "Post is locked" }));
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = &feed.cards()[0].reactions;
    let before = toggle.state();

    assert_eq!(toggle.toggle_like().await, ToggleOutcome::RolledBack);
    assert_eq!(toggle.state(), before);
    assert!(!toggle.is_pending());
    assert_eq!(
        app.state.notifier.visible().as_deref(),
        Some("Post is locked")
    );
}

#[tokio::test]
async fn failed_like_shows_optimistic_count_then_reverts_with_fallback() {
    let app = spawn_app(StubBackend::with_posts(vec![post_snapshot(
        "p1",
        user("u2", "bob"),
        0,
        0,
    )]))
    .await;
    app.backend
        .fail_reactions(json!({ "error": "An error occurred" }));
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = &feed.cards()[0].reactions;

    let pending = toggle.begin(ReactionKind::Like).expect("like should start");
    let shown = toggle.state();
    assert_eq!(shown.reaction(), Reaction::Liked);
    assert_eq!(shown.like_count(), 1);

    assert_eq!(pending.settle().await, ToggleOutcome::RolledBack);
    let shown = toggle.state();
    assert_eq!(shown.reaction(), Reaction::None);
    assert_eq!((shown.like_count(), shown.dislike_count()), (0, 0));
    assert_eq!(
        app.state.notifier.visible().as_deref(),
        Some("An error occurred while liking.")
    );
    assert_eq!(
        app.backend.reaction_calls(),
        vec![("/posts/p1/like".to_string(), json!({ "is_liked": false }))]
    );
}

#[tokio::test]
async fn failed_dislike_with_catch_all_error_uses_fallback() {
    let app = spawn_app(StubBackend::with_posts(vec![post_snapshot(
        "p1",
        user("u2", "bob"),
        0,
        0,
    )]))
    .await;
    app.backend
        .fail_reactions(json!({ "error": "An error occurred" }));
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = &feed.cards()[0].reactions;

    assert_eq!(toggle.toggle_dislike().await, ToggleOutcome::RolledBack);
    assert_eq!(toggle.state().reaction(), Reaction::None);
    assert_eq!(toggle.state().dislike_count(), 0);
    assert_eq!(
        app.state.notifier.visible().as_deref(),
        Some("An error occurred while disliking.")
    );
}

#[tokio::test]
async fn press_while_pending_is_ignored() {
    let app = spawn_app(StubBackend::with_posts(vec![post_snapshot(
        "p1",
        user("u2", "bob"),
        2,
        2,
    )]))
    .await;
    let mut feed = app.state.feed(SessionContext::anonymous(), FeedSource::Home);
    feed.load().await.expect("feed should load");
    let toggle = &feed.cards()[0].reactions;

    let pending = toggle.begin(ReactionKind::Like).expect("like should start");
    assert_eq!(
        toggle.begin(ReactionKind::Dislike).err(),
        Some(Skipped::InFlight)
    );
    assert_eq!(pending.settle().await, ToggleOutcome::Confirmed);
    assert_eq!(app.backend.reaction_calls().len(), 1);
}

#[tokio::test]
async fn comment_reactions_use_comment_endpoints() {
    let mut snapshot = post_snapshot("p1", user("u2", "bob"), 0, 0);
    snapshot["comments"] = json!([comment("c1", "p1", user("u2", "bob"))]);
    let app = spawn_app(StubBackend::with_posts(vec![snapshot])).await;
    let mut detail = app
        .state
        .post_detail(SessionContext::anonymous(), EntityId::from("p1"));
    detail.load().await.expect("post should load");
    let toggle = &detail
        .comment(&EntityId::from("c1"))
        .expect("c1 should be listed")
        .reactions;

    assert_eq!(toggle.toggle_like().await, ToggleOutcome::Confirmed);
    assert_eq!(toggle.state().like_count(), 1);
    assert_eq!(
        app.backend.reaction_calls(),
        vec![("/comments/c1/like".to_string(), json!({ "is_liked": false }))]
    );
}
