//! Fake user endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 serving `GET /users`. Tests can swap the collection, force an
//! error status, serve a raw (possibly malformed) body, add latency, and
//! count how many requests arrived.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeUserApi::start(alice_bob()).await.unwrap();
//! let cfg = search_config(&api.url(), 50);
//! let mut session = SearchSession::from_config(&cfg);
//! ```

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
struct ApiState {
    users: serde_json::Value,
    status: StatusCode,
    /// Served verbatim instead of `users` when set.
    raw_body: Option<String>,
    delay: Duration,
    hits: usize,
}

type Shared = Arc<Mutex<ApiState>>;

/// Handle to the running fake user API.
pub struct FakeUserApi {
    addr: SocketAddr,
    state: Shared,
}

impl FakeUserApi {
    /// Start the server with `users` as the collection. Returns once the
    /// listener is bound.
    pub async fn start(users: serde_json::Value) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            users,
            status: StatusCode::OK,
            raw_body: None,
            delay: Duration::ZERO,
            hits: 0,
        }));

        let app = Router::new()
            .route("/users", get(list_users))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Full URL of the collection (e.g. `http://127.0.0.1:PORT/users`).
    pub fn url(&self) -> String {
        format!("http://{}/users", self.addr)
    }

    pub async fn set_users(&self, users: serde_json::Value) {
        self.state.lock().await.users = users;
    }

    /// Answer every request with `status` and an empty JSON array.
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.lock().await.status = status;
    }

    /// Answer with `body` verbatim and status 200.
    pub async fn serve_raw(&self, body: &str) {
        self.state.lock().await.raw_body = Some(body.to_string());
    }

    pub async fn set_delay(&self, delay: Duration) {
        self.state.lock().await.delay = delay;
    }

    /// Number of requests received so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn list_users(State(state): State<Shared>) -> Response {
    let (status, body, delay) = {
        let mut state = state.lock().await;
        state.hits += 1;
        let body = match &state.raw_body {
            Some(raw) => raw.clone(),
            None if state.status.is_success() => state.users.to_string(),
            None => "[]".to_string(),
        };
        (state.status, body, state.delay)
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
