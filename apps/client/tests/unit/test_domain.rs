use client::domain::{
    movie::value_objects::{DEFAULT_AVATAR, POSTER_PLACEHOLDER, avatar_url, poster_url},
    reaction::{
        service::ReactionTarget,
        state::{Reaction, ReactionSnapshot, ReactionState},
    },
    shared::content::Content,
};

#[test]
fn content_rejects_blank_and_oversized_text() {
    assert!(Content::new("   ").is_err());
    assert!(Content::new(&"a".repeat(501)).is_err());
    assert_eq!(
        Content::new("  loved it  ").expect("valid content").as_str(),
        "loved it"
    );
}

#[test]
fn snapshot_with_both_flags_reads_as_like() {
    let state = ReactionState::from_snapshot(ReactionSnapshot {
        liked: true,
        disliked: true,
        likes: 4,
        dislikes: 1,
    });
    assert_eq!(state.reaction(), Reaction::Liked);
    assert_eq!((state.like_count(), state.dislike_count()), (4, 1));
}

#[test]
fn negative_counts_clamp_to_zero() {
    let state = ReactionState::from_snapshot(ReactionSnapshot {
        liked: false,
        disliked: false,
        likes: -3,
        dislikes: -1,
    });
    assert_eq!((state.like_count(), state.dislike_count()), (0, 0));
}

#[test]
fn reaction_targets_name_their_collection() {
    assert_eq!(ReactionTarget::post("p1").to_string(), "posts/p1");
    assert_eq!(ReactionTarget::comment("c9").to_string(), "comments/c9");
}

#[test]
fn media_urls_fall_back_to_placeholders() {
    assert_eq!(poster_url("https://img.test/", None), POSTER_PLACEHOLDER);
    assert_eq!(
        poster_url("https://img.test/", Some("/abc.jpg")),
        "https://img.test/abc.jpg"
    );
    assert_eq!(avatar_url("http://api.test", Some("")), DEFAULT_AVATAR);
}
