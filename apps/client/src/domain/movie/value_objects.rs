use serde::{Deserialize, Serialize};

pub const POSTER_PLACEHOLDER: &str = "/img/poster-placeholder.png";
pub const DEFAULT_AVATAR: &str = "/img/default-avatar.png";

/// Movie as embedded in posts and profile lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRef {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// Poster URL for `poster_path`, or the placeholder when the movie has none.
pub fn poster_url(poster_base_url: &str, poster_path: Option<&str>) -> String {
    match non_blank(poster_path) {
        Some(path) => format!(
            "{}/{}",
            poster_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        None => POSTER_PLACEHOLDER.to_string(),
    }
}

/// Avatar URL served by the backend, or the default avatar.
pub fn avatar_url(backend_url: &str, avatar: Option<&str>) -> String {
    match non_blank(avatar) {
        Some(file) if file.starts_with("http://") || file.starts_with("https://") => {
            file.to_string()
        }
        Some(file) => format!(
            "{}/avatars/{}",
            backend_url.trim_end_matches('/'),
            file.trim_start_matches('/')
        ),
        None => DEFAULT_AVATAR.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
