//! The single error kind of the search pipeline.
//!
//! Transport failures, non-success statuses and malformed bodies are all a
//! [`FetchError`] and are handled identically by the fetcher: logged, then
//! published in the view without touching the result list.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset, …).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of users.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
