//! rts-core — real-time user search core library.
//!
//! This crate holds everything the search widget needs that does not touch
//! the network or the terminal: the [`User`] record, the [`DebounceGate`],
//! the name filter, the published [`SearchView`], the single [`FetchError`]
//! kind and the layered configuration.
//!
//! # Architecture
//!
//! ```text
//! keystroke ──► DebounceGate ──► handler ──► Fetcher ──► SearchView ──► UI
//!                                  │                         ▲
//!                                  └──── empty query ────────┘
//! ```
//!
//! State flows to hosts through a `tokio::sync::watch` channel; the fetcher
//! and session live in `rts-fetch`.

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod state;
pub mod types;

pub use debounce::DebounceGate;
pub use error::FetchError;
pub use filter::filter_by_name;
pub use state::{SearchView, StalePolicy};
pub use types::User;
