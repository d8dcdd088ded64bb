//! Book discovery from the repository's directory listing.
//!
//! This is the only fetch whose failure ends the run: without the listing
//! there are no book ids to fetch anything for.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::JsonSource;

/// Errors that can occur while listing books
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Could not fetch the book listing from {url}")]
    Unreachable { url: String },

    #[error("Book listing at {url} is not a list (got {found})")]
    NotAList { url: String, found: &'static str },
}

/// List subdirectory names under the books directory, in listing order
pub async fn discover_books(source: &dyn JsonSource, url: &str) -> Result<Vec<String>, DiscoveryError> {
    let listing = source
        .fetch_json(url)
        .await
        .ok_or_else(|| DiscoveryError::Unreachable { url: url.to_string() })?;

    let entries = match listing {
        Value::Array(entries) => entries,
        other => {
            return Err(DiscoveryError::NotAList {
                url: url.to_string(),
                found: json_kind(&other),
            })
        }
    };

    let ids: Vec<String> = entries
        .iter()
        .filter(|entry| entry.get("type").and_then(Value::as_str) == Some("dir"))
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect();

    debug!(entries = entries.len(), books = ids.len(), "Listing filtered");
    info!("✓ Discovered {} books", ids.len());

    Ok(ids)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
