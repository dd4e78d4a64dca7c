use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode, Uri, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use client::{
    config::Config,
    domain::user::entity::{CurrentUser, SessionContext},
    state::ClientState,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the movie social network backend.
///
/// Every request is recorded as `"METHOD /path"` and reaction bodies are
/// kept so tests can assert on what the client sent.
#[derive(Default)]
pub struct StubBackend {
    pub posts: Mutex<Vec<Value>>,
    pub profiles: Mutex<Vec<Value>>,
    pub reported: Mutex<Vec<Value>>,
    pub users: Mutex<Vec<Value>>,
    pub requests: Mutex<Vec<String>>,
    pub reaction_calls: Mutex<Vec<(String, Value)>>,
    pub watched: Mutex<Vec<Value>>,
    /// When set, reaction endpoints answer 500 with this body.
    pub reaction_failure: Mutex<Option<Value>>,
}

impl StubBackend {
    pub fn with_posts(posts: Vec<Value>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    pub fn fail_reactions(&self, body: Value) {
        *self.reaction_failure.lock().expect("stub lock") = Some(body);
    }

    pub fn count(&self, request: &str) -> usize {
        self.requests
            .lock()
            .expect("stub lock")
            .iter()
            .filter(|r| r.as_str() == request)
            .count()
    }

    pub fn reaction_calls(&self) -> Vec<(String, Value)> {
        self.reaction_calls.lock().expect("stub lock").clone()
    }
}

pub struct TestApp {
    pub backend: Arc<StubBackend>,
    pub state: ClientState,
}

pub async fn spawn_app(backend: StubBackend) -> TestApp {
    let backend = Arc::new(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend has no address");
    let router = routes(backend.clone());
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub backend stopped");
    });

    let state = ClientState::new(Config::for_backend(format!("http://{}", addr)))
        .expect("failed to build client state");
    TestApp { backend, state }
}

pub fn user(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "profile": { "first_name": "", "last_name": "" }
    })
}

pub fn post_snapshot(id: &str, author: Value, likes: i64, dislikes: i64) -> Value {
    json!({
        "post": {
            "id": id,
            "user": author,
            "movie": { "id": 550, "title": "Fight Club", "poster_path": "/fc.jpg" },
            "content": format!("thoughts on {}", id)
        },
        "liked": false,
        "disliked": false,
        "likes": likes,
        "dislikes": dislikes,
        "created": "2024-01-02 10:00:00"
    })
}

pub fn comment(id: &str, post_id: &str, author: Value) -> Value {
    json!({
        "id": id,
        "post_id": post_id,
        "user": author,
        "likes": 0,
        "dislikes": 0,
        "liked_by": [],
        "disliked_by": [],
        "content": format!("comment {}", id)
    })
}

pub fn account(id: &str, username: &str, is_admin: bool) -> Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@example.com", username),
        "isAdmin": is_admin
    })
}

pub fn signed_in(id: &str, username: &str, is_admin: bool) -> SessionContext {
    SessionContext::authenticated(CurrentUser {
        id: Some(id.into()),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        is_admin,
    })
}

fn routes(backend: Arc<StubBackend>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/user", get(current_user))
        .route("/posts/", get(list_posts).post(create_post))
        .route("/posts/user/{user_id}", get(posts_by_user))
        .route(
            "/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/posts/{id}/report", post(ok))
        .route("/posts/{id}/like", post(react))
        .route("/posts/{id}/dislike", post(react))
        .route("/comments/", post(create_comment))
        .route("/comments/{id}", put(ok).delete(ok))
        .route("/comments/{id}/report", post(ok))
        .route("/comments/{id}/like", post(react))
        .route("/comments/{id}/dislike", post(react))
        .route("/profile/{username}", get(get_profile))
        .route("/profile/movies/add/watched", post(add_watched))
        .route("/follow/{id}", post(ok).delete(ok))
        .route("/admin/reports/posts", get(reported_posts))
        .route("/admin/reports/posts/{id}", delete(delete_reported))
        .route("/admin/users", get(admin_users))
        .route("/admin/users/{id}", put(toggle_admin))
        .layer(middleware::from_fn_with_state(backend.clone(), record))
        .with_state(backend)
}

async fn record(State(backend): State<Arc<StubBackend>>, request: Request, next: Next) -> Response {
    backend
        .requests
        .lock()
        .expect("stub lock")
        .push(format!("{} {}", request.method(), request.uri().path()));
    next.run(request).await
}

async fn ok() -> Json<Value> {
    Json(json!({}))
}

fn session_username(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| pair.trim().strip_prefix("session="))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

async fn login(State(backend): State<Arc<StubBackend>>, Json(body): Json<Value>) -> Response {
    let users = backend.users.lock().expect("stub lock");
    match users.iter().find(|u| u["email"] == body["email"]) {
        Some(found) => {
            let cookie = format!(
                "session={}; Path=/",
                found["username"].as_str().unwrap_or_default()
            );
            ([(header::SET_COOKIE, cookie)], Json(json!({}))).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid email or password" })),
        )
            .into_response(),
    }
}

async fn logout() -> Response {
    (
        [(header::SET_COOKIE, "session=; Path=/; Max-Age=0")],
        Json(json!({})),
    )
        .into_response()
}

async fn current_user(State(backend): State<Arc<StubBackend>>, headers: HeaderMap) -> Response {
    let users = backend.users.lock().expect("stub lock");
    let found = session_username(&headers)
        .and_then(|name| users.iter().find(|u| u["username"] == name.as_str()).cloned());
    match found {
        Some(user) => Json(json!({ "user": user })).into_response(),
        None => (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" }))).into_response(),
    }
}

async fn list_posts(State(backend): State<Arc<StubBackend>>) -> Json<Value> {
    Json(Value::Array(backend.posts.lock().expect("stub lock").clone()))
}

async fn posts_by_user(
    State(backend): State<Arc<StubBackend>>,
    Path(user_id): Path<String>,
) -> Json<Value> {
    let posts = backend.posts.lock().expect("stub lock");
    Json(Value::Array(
        posts
            .iter()
            .filter(|p| p["post"]["user"]["id"] == user_id.as_str())
            .cloned()
            .collect(),
    ))
}

async fn get_post(State(backend): State<Arc<StubBackend>>, Path(id): Path<String>) -> Response {
    let posts = backend.posts.lock().expect("stub lock");
    match posts.iter().find(|p| p["post"]["id"] == id.as_str()) {
        Some(found) => Json(found.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "Post not found" }))).into_response(),
    }
}

async fn create_post(State(backend): State<Arc<StubBackend>>, Json(body): Json<Value>) -> Json<Value> {
    let mut posts = backend.posts.lock().expect("stub lock");
    let post = json!({
        "id": format!("new-{}", posts.len()),
        "user": user("u1", "alice"),
        "movie": { "id": body["movie_id"], "title": "" },
        "content": body["content"]
    });
    posts.insert(
        0,
        json!({ "post": post, "liked": false, "disliked": false, "likes": 0, "dislikes": 0 }),
    );
    Json(post)
}

async fn update_post(
    State(backend): State<Arc<StubBackend>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut posts = backend.posts.lock().expect("stub lock");
    if let Some(found) = posts.iter_mut().find(|p| p["post"]["id"] == id.as_str()) {
        found["post"]["content"] = body["content"].clone();
    }
    Json(json!({}))
}

async fn delete_post(State(backend): State<Arc<StubBackend>>, Path(id): Path<String>) -> Json<Value> {
    backend
        .posts
        .lock()
        .expect("stub lock")
        .retain(|p| p["post"]["id"] != id.as_str());
    Json(json!({}))
}

async fn react(State(backend): State<Arc<StubBackend>>, uri: Uri, Json(body): Json<Value>) -> Response {
    backend
        .reaction_calls
        .lock()
        .expect("stub lock")
        .push((uri.path().to_string(), body));
    match backend.reaction_failure.lock().expect("stub lock").clone() {
        Some(failure) => (StatusCode::INTERNAL_SERVER_ERROR, Json(failure)).into_response(),
        None => Json(json!({})).into_response(),
    }
}

async fn create_comment(Json(body): Json<Value>) -> Json<Value> {
    let mut created = comment("c-new", body["post_id"].as_str().unwrap_or_default(), user("u1", "alice"));
    created["content"] = body["content"].clone();
    Json(created)
}

async fn get_profile(
    State(backend): State<Arc<StubBackend>>,
    Path(username): Path<String>,
) -> Response {
    let profiles = backend.profiles.lock().expect("stub lock");
    match profiles.iter().find(|p| p["username"] == username.as_str()) {
        Some(found) => Json(json!({ "profile": found })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "User not found" }))).into_response(),
    }
}

async fn add_watched(State(backend): State<Arc<StubBackend>>, Json(body): Json<Value>) -> Json<Value> {
    backend
        .watched
        .lock()
        .expect("stub lock")
        .push(body["movieId"].clone());
    Json(json!({}))
}

async fn reported_posts(State(backend): State<Arc<StubBackend>>) -> Json<Value> {
    Json(Value::Array(backend.reported.lock().expect("stub lock").clone()))
}

async fn delete_reported(
    State(backend): State<Arc<StubBackend>>,
    Path(id): Path<String>,
) -> Json<Value> {
    backend
        .reported
        .lock()
        .expect("stub lock")
        .retain(|r| r["id"] != id.as_str());
    Json(json!({}))
}

async fn admin_users(State(backend): State<Arc<StubBackend>>) -> Json<Value> {
    Json(json!({ "users": backend.users.lock().expect("stub lock").clone() }))
}

async fn toggle_admin(State(backend): State<Arc<StubBackend>>, Path(id): Path<String>) -> Json<Value> {
    let mut users = backend.users.lock().expect("stub lock");
    if let Some(found) = users.iter_mut().find(|u| u["id"] == id.as_str()) {
        let flipped = !found["isAdmin"].as_bool().unwrap_or(false);
        found["isAdmin"] = Value::Bool(flipped);
    }
    Json(json!({}))
}
