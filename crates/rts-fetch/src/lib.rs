//! rts-fetch — user sources and the search pipeline for rts.
//!
//! A [`UserSource`] returns the whole remote collection; the
//! [`SearchFetcher`] runs one source call per search, filters the result and
//! publishes a [`rts_core::SearchView`]; the [`SearchSession`] ties a query
//! string, a debounce gate and a fetcher together into the widget controller
//! hosts drive keystroke by keystroke.

pub mod fetcher;
pub mod session;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use fetcher::SearchFetcher;
pub use session::SearchSession;
pub use source::{HttpUserSource, UserSource};
