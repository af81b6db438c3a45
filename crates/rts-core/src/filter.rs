//! Client-side name filter.
//!
//! The endpoint is never asked to filter; the full collection is fetched and
//! narrowed here. Matching is a case-insensitive, unanchored substring test
//! against [`User::name`] only. Source order is preserved.

use crate::types::User;

/// Keep the users whose lower-cased name contains the lower-cased `term`.
///
/// An empty term matches every user; the search handler never sends one here
/// (it clears the result list instead), but the function stays total.
pub fn filter_by_name(users: Vec<User>, term: &str) -> Vec<User> {
    let needle = term.to_lowercase();
    users
        .into_iter()
        .filter(|u| u.name.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
