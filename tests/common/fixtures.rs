//! Static user collections and config helpers used across harnesses.

use rts_core::config::SearchConfig;
use rts_core::{StalePolicy, User};
use serde_json::json;
use std::time::Duration;

/// The two-user collection from the widget's reference scenarios.
pub fn alice_bob() -> serde_json::Value {
    json!([
        { "id": 1, "name": "Alice", "email": "a@x.com" },
        { "id": 2, "name": "Bob", "email": "b@x.com" }
    ])
}

/// A slice of the public JSONPlaceholder `/users` payload, extra fields and
/// all, to check that decoding keeps only what it needs.
pub fn placeholder_users() -> serde_json::Value {
    json!([
        {
            "id": 1, "name": "Leanne Graham", "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "phone": "1-770-736-8031 x56442", "website": "hildegard.org"
        },
        {
            "id": 3, "name": "Clementine Bauch", "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "company": { "name": "Romaguera-Jacobson" }
        },
        {
            "id": 6, "name": "Mrs. Dennis Schulist", "username": "Leopoldo_Corkery",
            "email": "Karley_Dach@jasper.info"
        },
        {
            "id": 10, "name": "Clementina DuBuque", "username": "Moriah.Stanton",
            "email": "Rey.Padberg@karina.biz"
        }
    ])
}

pub fn alice() -> User {
    User::new(1, "Alice", "a@x.com")
}

pub fn bob() -> User {
    User::new(2, "Bob", "b@x.com")
}

/// `[search]` config pointed at `endpoint` with a short debounce window.
pub fn search_config(endpoint: &str, debounce_ms: u64) -> SearchConfig {
    SearchConfig {
        endpoint: endpoint.to_string(),
        debounce_ms,
        stale_responses: StalePolicy::Apply,
    }
}

/// Upper bound for any single wait in a harness.
pub const WAIT: Duration = Duration::from_secs(5);

/// A URL nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/users")
}
