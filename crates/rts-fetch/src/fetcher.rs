//! Search fetcher — one source round trip per search term.
//!
//! # Lifecycle of a fetch
//!
//! 1. [`SearchFetcher::fetch`] marks the view as loading before it returns,
//!    then spawns the round trip.
//! 2. On success the collection is narrowed with [`filter_by_name`] and
//!    replaces the result list wholesale.
//! 3. On failure the error is logged and stored in
//!    [`SearchView::last_error`]; the result list is left as it was.
//! 4. Either way the loading flag is cleared last.
//!
//! There is no retry and no cancellation: a fetch that has been issued always
//! runs to completion. Whether a completion that is no longer the newest may
//! still update the view is decided by the [`StalePolicy`].

use crate::source::UserSource;
use rts_core::{filter_by_name, FetchError, SearchView, StalePolicy, User};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct SearchFetcher {
    source: Arc<dyn UserSource>,
    policy: StalePolicy,
    view: watch::Sender<SearchView>,
    /// Id of the most recently issued request; ids start at 1.
    issued: AtomicU64,
}

impl SearchFetcher {
    pub fn new(source: Arc<dyn UserSource>, policy: StalePolicy) -> Arc<Self> {
        let (view, _) = watch::channel(SearchView::default());
        Arc::new(Self {
            source,
            policy,
            view,
            issued: AtomicU64::new(0),
        })
    }

    /// Start a search for `term`.
    ///
    /// The loading flag is raised synchronously; the round trip runs on a
    /// spawned task whose handle is returned so callers may await it. The task
    /// never fails: errors end up in the log and in the view.
    pub fn fetch(self: &Arc<Self>, term: String) -> JoinHandle<()> {
        // Ids are issued under the view lock so a completion can never see
        // an id whose loading flag has not been published yet.
        let mut request = 0;
        self.view.send_modify(|v| {
            request = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            v.loading = true;
        });
        tracing::debug!(request, term = %term, source = self.source.name(), "fetch: started");

        let this = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = this.source.fetch_users().await;
            this.complete(request, &term, outcome);
        })
    }

    /// Empty-query branch: drop the current results without a round trip.
    ///
    /// Under [`StalePolicy::Apply`] the loading flag is not touched, so a
    /// fetch still in flight keeps it raised and will repopulate the list when
    /// it lands. Under [`StalePolicy::Discard`] clearing also retires every
    /// in-flight request and lowers the flag.
    pub fn clear_results(&self) {
        match self.policy {
            StalePolicy::Apply => self.view.send_modify(|v| v.results.clear()),
            StalePolicy::Discard => {
                self.view.send_modify(|v| {
                    self.issued.fetch_add(1, Ordering::SeqCst);
                    v.results.clear();
                    v.loading = false;
                });
            }
        }
        tracing::debug!("fetch: results cleared for empty query");
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.view.subscribe()
    }

    pub fn snapshot(&self) -> SearchView {
        self.view.borrow().clone()
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    fn complete(&self, request: u64, term: &str, outcome: Result<Vec<User>, FetchError>) {
        let discard = self.policy == StalePolicy::Discard;
        let outcome = outcome.map(|users| {
            let total = users.len();
            (total, filter_by_name(users, term))
        });
        let summary = match &outcome {
            Ok((total, matches)) => Ok((*total, matches.len())),
            Err(err) => Err(err.to_string()),
        };

        // The staleness check and the update share one critical section with
        // `fetch`, so a newer request cannot slip in between them.
        let mut latest = request;
        let applied = self.view.send_if_modified(|v| {
            latest = self.issued.load(Ordering::SeqCst);
            if discard && request != latest {
                return false;
            }
            match outcome {
                Ok((_, matches)) => {
                    v.results = matches;
                    v.last_error = None;
                }
                Err(err) => v.last_error = Some(err),
            }
            v.loading = false;
            v.completed += 1;
            true
        });

        if !applied {
            tracing::debug!(request, latest, term = %term, "fetch: discarding stale response");
            return;
        }
        match summary {
            Ok((total, matched)) => {
                tracing::debug!(request, total, matched, "fetch: completed");
            }
            Err(error) => {
                tracing::error!(request, term = %term, error = %error, "error fetching users");
            }
        }
    }
}

impl std::fmt::Debug for SearchFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchFetcher")
            .field("source", &self.source.name())
            .field("policy", &self.policy)
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
