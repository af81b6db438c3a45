//! User sources — where the collection comes from.
//!
//! The fetcher only ever asks a source for the complete list; filtering is
//! done client-side. [`HttpUserSource`] is the production implementation: one
//! plain `GET` with no query parameters, headers or pagination.

use async_trait::async_trait;
use reqwest::Client;
use rts_core::{FetchError, User};

/// Trait implemented by anything that can produce the full user collection.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Short label used in log records.
    fn name(&self) -> &str;

    /// Retrieve the complete collection in source order.
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

/// Fetches the collection from a fixed HTTP(S) endpoint.
///
/// No timeout is configured beyond the client default.
pub struct HttpUserSource {
    client: Client,
    endpoint: String,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        tracing::trace!(endpoint = %self.endpoint, bytes = body.len(), "source: body received");

        Ok(serde_json::from_slice(&body)?)
    }
}
