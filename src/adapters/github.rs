//! GitHub adapter: contents API for directory listings, raw host for files.
//!
//! Auth: optional bearer token, attached to every request when configured.

use async_trait::async_trait;
use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::JsonSource;
use crate::domain::Language;

/// Identifying client header sent with every request
pub const USER_AGENT: &str = concat!("lorebook/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the GitHub API
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com";

/// Where things live in the mod repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoLayout {
    pub api_base: String,
    pub raw_base: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory whose subdirectories are the books
    pub books_dir: String,
    /// Directory holding `<lang>.json` localization tables
    pub lang_dir: String,
    /// Per-book metadata file name
    pub meta_file: String,
}

impl RepoLayout {
    /// Directory listing for the books directory
    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.books_dir.trim_matches('/'),
            self.branch
        )
    }

    /// Shared localization table for a language
    pub fn table_url(&self, language: &Language) -> String {
        self.raw_url(&format!("{}/{}.json", self.lang_dir.trim_matches('/'), language))
    }

    /// Author metadata for one book
    pub fn meta_url(&self, book_id: &str) -> String {
        self.raw_url(&format!(
            "{}/{}/{}",
            self.books_dir.trim_matches('/'),
            book_id,
            self.meta_file
        ))
    }

    /// One book's content in one language
    pub fn content_url(&self, book_id: &str, language: &Language) -> String {
        self.raw_url(&format!(
            "{}/{}/{}.json",
            self.books_dir.trim_matches('/'),
            book_id,
            language
        ))
    }

    fn raw_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch,
            path
        )
    }
}

/// HTTP client for GitHub-hosted JSON documents
pub struct GitHubClient {
    /// Optional bearer token
    token: Option<String>,
    /// HTTP client
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new client, optionally authenticated
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_builder(token, reqwest::Client::builder())
    }

    /// Create a client from a preconfigured builder (proxies, timeouts)
    pub fn with_builder(token: Option<String>, builder: reqwest::ClientBuilder) -> Result<Self> {
        let client = builder
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    /// Whether requests carry an `Authorization` header
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[async_trait]
impl JsonSource for GitHubClient {
    fn name(&self) -> &str {
        "github"
    }

    async fn fetch_json(&self, url: &str) -> Option<Value> {
        debug!(%url, "Fetching");

        let mut request = self.client.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "Request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Fetch failed");
            return None;
        }

        match response.json::<Value>().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(%url, error = %e, "Response is not valid JSON");
                None
            }
        }
    }
}
