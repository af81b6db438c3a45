//! Scripted in-memory [`UserSource`] for unit tests.

use crate::source::UserSource;
use async_trait::async_trait;
use rts_core::{FetchError, User};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub(crate) struct FakeSource {
    users: Mutex<Vec<User>>,
    /// Per-call latency, consumed front to back; empty means "answer now".
    latencies: Mutex<VecDeque<Duration>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Default::default()
        }
    }

    pub(crate) fn alice_bob() -> Self {
        Self::with_users(vec![
            User::new(1, "Alice", "a@x.com"),
            User::new(2, "Bob", "b@x.com"),
        ])
    }

    pub(crate) fn push_latency(&self, latency: Duration) {
        self.latencies.lock().unwrap().push_back(latency);
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let latency = self.latencies.lock().unwrap().pop_front();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Transport("connection refused".to_string()));
        }
        Ok(self.users.lock().unwrap().clone())
    }
}
