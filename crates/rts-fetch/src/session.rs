//! Search session — the controller behind one search input.
//!
//! Every keystroke goes through [`SearchSession::input`]: the query text is
//! stored immediately and the value is handed to a [`DebounceGate`]. When the
//! gate fires, an empty value clears the result list on the spot and a
//! non-empty one starts a [`SearchFetcher`] round trip.
//!
//! Dropping the session cancels a pending debounce; fetches already started
//! are left to finish.

use crate::fetcher::SearchFetcher;
use crate::source::{HttpUserSource, UserSource};
use rts_core::config::SearchConfig;
use rts_core::{DebounceGate, SearchView};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Debug)]
pub struct SearchSession {
    query: String,
    gate: DebounceGate<String>,
    fetcher: Arc<SearchFetcher>,
}

impl SearchSession {
    pub fn new(fetcher: Arc<SearchFetcher>, delay: Duration) -> Self {
        let handler = Arc::clone(&fetcher);
        let gate = DebounceGate::new(delay, move |term: String| {
            if term.is_empty() {
                handler.clear_results();
            } else {
                handler.fetch(term);
            }
        });
        Self {
            query: String::new(),
            gate,
            fetcher,
        }
    }

    /// Session over an arbitrary source, configured from `[search]`.
    pub fn with_source(source: Arc<dyn UserSource>, cfg: &SearchConfig) -> Self {
        let fetcher = SearchFetcher::new(source, cfg.stale_responses);
        Self::new(fetcher, cfg.debounce())
    }

    /// Session over the configured HTTP endpoint.
    pub fn from_config(cfg: &SearchConfig) -> Self {
        tracing::debug!(
            endpoint = %cfg.endpoint,
            debounce_ms = cfg.debounce_ms,
            stale = %cfg.stale_responses,
            "session: created"
        );
        Self::with_source(Arc::new(HttpUserSource::new(cfg.endpoint.clone())), cfg)
    }

    /// Record the new query text and schedule a search for it.
    pub fn input(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.query.clone_from(&value);
        self.gate.call(value);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> SearchView {
        self.fetcher.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.fetcher.subscribe()
    }

    /// Whether the "no results" indicator should be visible: something has
    /// been typed, nothing is loading and the result list is empty.
    pub fn shows_no_results(&self) -> bool {
        let view = self.fetcher.snapshot();
        !self.query.is_empty() && !view.loading && view.results.is_empty()
    }

    /// Whether a debounced search is waiting for its quiet window.
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Drop the pending debounced search, if any.
    pub fn cancel_pending(&mut self) -> bool {
        self.gate.cancel()
    }

    pub fn fetcher(&self) -> &Arc<SearchFetcher> {
        &self.fetcher
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
