//! Shared test fixtures: an in-memory document source and a repo layout.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use lorebook::adapters::JsonSource;
use lorebook::RepoLayout;
use serde_json::Value;

/// Serves canned documents by URL; anything else is absent
#[derive(Default)]
pub struct MemorySource {
    documents: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_json(&self, url: &str) -> Option<Value> {
        self.requests.lock().unwrap().push(url.to_string());
        self.documents.get(url).cloned()
    }
}

pub fn layout() -> RepoLayout {
    RepoLayout {
        api_base: "http://api.test".to_string(),
        raw_base: "http://raw.test".to_string(),
        owner: "someone".to_string(),
        repo: "some-mod".to_string(),
        branch: "main".to_string(),
        books_dir: "books".to_string(),
        lang_dir: "lang".to_string(),
        meta_file: "meta.json".to_string(),
    }
}

pub const LISTING: &str = "http://api.test/repos/someone/some-mod/contents/books?ref=main";

pub fn lang_url(lang: &str) -> String {
    format!("http://raw.test/someone/some-mod/main/lang/{lang}.json")
}

pub fn meta_url(id: &str) -> String {
    format!("http://raw.test/someone/some-mod/main/books/{id}/meta.json")
}

pub fn content_url(id: &str, lang: &str) -> String {
    format!("http://raw.test/someone/some-mod/main/books/{id}/{lang}.json")
}
