//! Common Test Utilities
//!
//! A stub of the marketplace API served by axum on an ephemeral port, and a
//! client application wired against it with in-memory storage.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use campus_market::config::Settings;
use campus_market::infrastructure::storage::{keys, KeyValueStore, MemoryStore};
use campus_market::startup::{AppContext, Application};

/// Credentials the stub accepts.
pub const USERNAME: &str = "somchai";
pub const PASSWORD: &str = "password123";

/// Access tokens the stub accepts; the second is issued by refresh.
pub const ACCESS_TOKEN: &str = "access-1";
pub const REFRESHED_ACCESS_TOKEN: &str = "access-2";
pub const REFRESH_TOKEN: &str = "refresh-1";

/// Item served by `items/40/`, owned by user 9.
pub const LAMP_ID: i64 = 40;

/// Requests the stub recorded.
#[derive(Default)]
pub struct Recorded {
    pub cart_adds: Vec<Value>,
    pub wanted_posts: Vec<Value>,
}

#[derive(Clone, Default)]
pub struct StubState {
    pub recorded: Arc<Mutex<Recorded>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = [
        format!("Bearer {}", ACCESS_TOKEN),
        format!("Bearer {}", REFRESHED_ACCESS_TOKEN),
    ];
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| expected.iter().any(|e| e == value))
        .unwrap_or(false)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Given token not valid for any token type"})),
    )
}

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

pub fn lamp() -> Value {
    json!({
        "id": LAMP_ID,
        "owner": 9,
        "owner_username": "mei",
        "title": "Desk lamp",
        "description": "Warm light, barely used",
        "price": "350.00",
        "category": "furniture",
        "condition": "like_new",
        "location": "Dorm C",
        "contact_phone": "081-234-5678",
        "is_available": true,
        "is_featured": true
    })
}

fn guitar() -> Value {
    json!({
        "id": 41,
        "owner": 9,
        "title": "Acoustic guitar",
        "is_barter": true,
        "desired_item": "Bicycle",
        "condition": "good"
    })
}

fn user() -> Value {
    json!({
        "id": 7,
        "username": USERNAME,
        "email": "somchai@ait.ac.th",
        "first_name": "Somchai",
        "last_name": "",
        "date_joined": "2025-01-10T08:00:00Z"
    })
}

fn cart_body(recorded: &Recorded) -> Value {
    let lines: Vec<Value> = recorded
        .cart_adds
        .iter()
        .enumerate()
        .map(|(i, _)| json!({"id": i + 1, "item": lamp(), "quantity": 1, "total_price": "350.00"}))
        .collect();
    let count = lines.len();
    json!({
        "id": 1,
        "items": lines,
        "total_items": count,
        "total_price": format!("{}.00", 350 * count)
    })
}

async fn token(Json(body): Json<Value>) -> Reply {
    if body["username"] == USERNAME && body["password"] == PASSWORD {
        ok(json!({"access": ACCESS_TOKEN, "refresh": REFRESH_TOKEN}))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
    }
}

async fn refresh(Json(body): Json<Value>) -> Reply {
    if body["refresh"] == REFRESH_TOKEN {
        ok(json!({"access": REFRESHED_ACCESS_TOKEN}))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Token is invalid or expired"})),
        )
    }
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"username": ["A user with that username already exists."]})),
        );
    }
    let username = body["username"].clone();
    let email = body["email"].clone();
    (
        StatusCode::CREATED,
        Json(json!({"id": 8, "username": username, "ait_email": email})),
    )
}

async fn profile(headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(user())
}

async fn membership(headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(json!({"is_valid": false, "message": "No active membership"}))
}

async fn items(Query(params): Query<Vec<(String, String)>>) -> Reply {
    let has = |key: &str| params.iter().any(|(k, v)| k == key && v == "true");
    if has("featured") {
        ok(json!([lamp()]))
    } else if has("is_barter") {
        ok(json!([guitar()]))
    } else {
        ok(json!({"count": 2, "next": null, "results": [lamp(), guitar()]}))
    }
}

async fn item(Path(id): Path<i64>) -> Reply {
    match id {
        LAMP_ID => ok(lamp()),
        41 => ok(guitar()),
        _ => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))),
    }
}

async fn search(Query(params): Query<Vec<(String, String)>>) -> Reply {
    let q = params
        .iter()
        .find(|(k, _)| k == "q")
        .map(|(_, v)| v.to_lowercase())
        .unwrap_or_default();
    let hits: Vec<Value> = [lamp(), guitar()]
        .into_iter()
        .filter(|item| {
            item["title"]
                .as_str()
                .map(|t| t.to_lowercase().contains(&q))
                .unwrap_or(false)
        })
        .collect();
    ok(Value::Array(hits))
}

async fn cart(State(state): State<StubState>, headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(cart_body(&state.recorded.lock()))
}

async fn cart_add(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut recorded = state.recorded.lock();
    recorded.cart_adds.push(body);
    ok(cart_body(&recorded))
}

async fn post_info(headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    ok(json!({
        "is_premium": false,
        "free_posts_used": 3,
        "free_posts_remaining": 0,
        "can_post_free": false,
        "posting_fee": "10.00",
        "member_free_posts": 0
    }))
}

async fn wanted_list() -> Reply {
    ok(json!([{
        "id": 3,
        "user": 9,
        "user_username": "mei",
        "title": "Rice cooker",
        "max_price": "500.00",
        "condition_preference": "any",
        "location": "Dorm A"
    }]))
}

async fn wanted_create(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut reply = body.clone();
    reply["id"] = json!(12);
    reply["user_username"] = json!(USERNAME);
    state.recorded.lock().wanted_posts.push(body);
    (StatusCode::CREATED, Json(reply))
}

fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/users/token/", post(token))
        .route("/api/users/token/refresh/", post(refresh))
        .route("/api/users/register/", post(register))
        .route("/api/users/profile/", get(profile))
        .route("/api/users/membership/", get(membership))
        .route("/api/items/", get(items))
        .route("/api/items/{id}/", get(item))
        .route("/api/search/items/", get(search))
        .route("/api/cart/", get(cart))
        .route("/api/cart/add/", post(cart_add))
        .route("/api/wanted/post-info/", get(post_info))
        .route("/api/wanted/wanted/", get(wanted_list).post(wanted_create))
        .with_state(state)
}

/// Client application running against the stub.
pub struct TestApp {
    pub app: Application,
    pub store: Arc<MemoryStore>,
    pub stub: StubState,
}

impl TestApp {
    /// Start the stub and build an anonymous client.
    pub async fn spawn() -> Self {
        Self::spawn_with(MemoryStore::new()).await
    }

    /// Start the stub and build a client with a stored, valid session.
    pub async fn spawn_logged_in() -> Self {
        Self::spawn_with(MemoryStore::with_entries([
            (keys::ACCESS_TOKEN, ACCESS_TOKEN),
            (keys::REFRESH_TOKEN, REFRESH_TOKEN),
        ]))
        .await
    }

    pub async fn spawn_with(store: MemoryStore) -> Self {
        let stub = StubState::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let router = router(stub.clone());
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("stub server");
        });

        let mut settings = Settings::default();
        settings.api.base_url = format!("http://{}/api", addr);

        let store = Arc::new(store);
        let context = AppContext::new(settings, store.clone()).expect("wire context");
        let app = Application::from_context(context).await;

        Self { app, store, stub }
    }

    pub fn context(&self) -> &AppContext {
        self.app.context()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("read store")
    }
}
