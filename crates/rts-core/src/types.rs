//! Core types for rts-core.
//!
//! A [`User`] is one item of the remote collection and one row of the result
//! list. Records are taken verbatim from the endpoint and never mutated.

use serde::{Deserialize, Serialize};

/// One entry of the remote user collection.
///
/// Only the fields the widget displays or filters on are kept; any other keys
/// in the remote JSON object are ignored during deserialisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name. The search filter matches against this field only.
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
