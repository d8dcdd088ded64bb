//! Adapter interfaces for remote document sources.
//!
//! Every network read goes through a `JsonSource`. Sources never fail past
//! their boundary: a bad status, transport error or unparsable body is
//! logged as a warning and reported as `None`.

pub mod github;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

// Re-export the GitHub adapter
pub use github::{GitHubClient, RepoLayout};

/// Trait for remote JSON document sources
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Fetch and parse a JSON document, or `None` if it is unavailable
    async fn fetch_json(&self, url: &str) -> Option<Value>;
}

/// Fetch a document and decode it into `T`
///
/// A document that arrives but has the wrong shape is treated exactly like
/// one that never arrived.
pub async fn fetch_typed<T: DeserializeOwned>(source: &dyn JsonSource, url: &str) -> Option<T> {
    let value = source.fetch_json(url).await?;

    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(%url, error = %e, "Unexpected document shape");
            None
        }
    }
}
