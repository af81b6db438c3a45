//! rts — real-time user search.
//!
//! A text input that looks users up in a remote collection as you type. Each
//! keystroke is debounced; when typing pauses the full collection is fetched
//! and filtered client-side by name. This crate wires the layers together for
//! the binary and exposes them so integration tests can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! rts-tui ──► SearchSession ──► DebounceGate ──► SearchFetcher ──► UserSource
//!    ▲                                                 │
//!    └──────────────── SearchView (watch) ◄────────────┘
//! ```
//!
//! Headless mode drives the same session once and prints the results.

pub mod headless;

pub use rts_core::{config::Config, DebounceGate, FetchError, SearchView, StalePolicy, User};
pub use rts_fetch::{HttpUserSource, SearchFetcher, SearchSession, UserSource};
