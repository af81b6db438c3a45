//! The observable state of one search widget.
//!
//! [`SearchView`] is what hosts render: the current result list, the loading
//! flag and the last fetch failure. It is published by the fetcher over a
//! `tokio::sync::watch` channel and replaced field-by-field on every
//! transition.

use crate::{error::FetchError, types::User};
use serde::Deserialize;

/// Snapshot of the widget state published to hosts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchView {
    /// Output of the last completed fetch, filtered by the term that fetch
    /// was issued with. Not necessarily the term currently typed.
    pub results: Vec<User>,
    /// True strictly between a fetch starting and that fetch completing.
    pub loading: bool,
    /// Most recent fetch failure, cleared by the next successful fetch.
    /// Hosts decide whether to surface it; the default UI stays silent.
    pub last_error: Option<FetchError>,
    /// Number of fetch completions applied to this view.
    pub completed: u64,
}

/// What to do with a response that arrives after a newer fetch was issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Every completion overwrites the view, newest or not. An older,
    /// slower response can replace the results of a newer one.
    #[default]
    Apply,
    /// Each fetch carries a request id; completions whose id is not the
    /// latest issued are dropped without touching the view.
    Discard,
}

impl std::fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StalePolicy::Apply => write!(f, "apply"),
            StalePolicy::Discard => write!(f, "discard"),
        }
    }
}
