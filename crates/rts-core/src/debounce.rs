//! Debounce gate — only the last call inside a quiet window fires.
//!
//! [`DebounceGate::call`] cancels whatever invocation is still pending and
//! schedules a new one `delay` after the call. Superseded arguments are
//! dropped, never executed. The pending timer is a Tokio task owned by the
//! gate, so cancelling it (explicitly, by rescheduling, or by dropping the
//! gate) aborts the task before the callback runs.
//!
//! Timing uses `tokio::time`, so tests can drive the gate on a paused clock.
//!
//! # Runtime
//!
//! `call` spawns onto the current Tokio runtime and panics if there is none,
//! like [`tokio::spawn`].

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

pub struct DebounceGate<T> {
    delay: Duration,
    callback: Callback<T>,
    /// Timer task for the one invocation that may be waiting to fire.
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> DebounceGate<T> {
    /// Wrap `callback` so it fires only after `delay` has passed with no
    /// further [`call`](Self::call).
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule `callback(arg)` for `delay` from now, discarding any
    /// invocation that has not fired yet.
    pub fn call(&mut self, arg: T) {
        let superseded = self.cancel();
        let deadline = Instant::now() + self.delay;
        let callback = Arc::clone(&self.callback);
        tracing::trace!(superseded, delay_ms = self.delay.as_millis() as u64, "debounce: scheduled");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            callback(arg);
        }));
    }

    /// Cancel the pending invocation. Returns `true` if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for DebounceGate<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> std::fmt::Debug for DebounceGate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebounceGate")
            .field("delay", &self.delay)
            .field("pending", &self.pending.as_ref().map(|h| !h.is_finished()))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
