use client::{application::feed::use_case::FeedSource, config::Config, state::ClientState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG wins when set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,client=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    tracing::info!(backend = %config.backend_url, "connecting");
    let state = ClientState::new(config)?;

    let session = state.session().resolve().await?;
    match session.viewer() {
        Some(user) => tracing::info!(username = %user.username, "signed in"),
        None => tracing::info!("browsing anonymously"),
    }

    let mut feed = state.feed(session, FeedSource::Home);
    feed.load().await?;
    for card in feed.cards() {
        let reactions = card.reactions.state();
        tracing::info!(
            post_id = %card.post.id,
            author = %card.author_name(),
            movie = %card.post.movie.title,
            likes = reactions.like_count(),
            dislikes = reactions.dislike_count(),
            "{}",
            card.post.content
        );
    }

    if let Some(message) = state.notifier.visible() {
        tracing::warn!("{}", message);
    }
    Ok(())
}
