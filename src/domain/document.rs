//! The aggregate document assembled from the remote repository.
//!
//! One `AggregateDocument` is built per run and serialized once. Maps are
//! `BTreeMap`s so the data file is byte-for-byte deterministic for a given
//! set of fetched inputs; discovery order is kept separately in `order`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::language::Language;

/// Translation key -> display string, for one language
pub type LocalizationTable = BTreeMap<String, String>;

/// One localization table per language that could be fetched
pub type Translations = BTreeMap<Language, LocalizationTable>;

/// Localized content for one book, keyed by language
pub type BookContents = BTreeMap<Language, LocalizedContent>;

/// A book's text in one language
///
/// The fetched object is kept verbatim, so the data file carries every
/// field the source provided. Only `contents` and `credit` are read, and
/// both leniently: non-string pages read as empty, a non-string credit as
/// absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedContent(Map<String, Value>);

impl LocalizedContent {
    /// Build content from page texts and an optional credit line
    pub fn new(pages: Vec<String>, credit: Option<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(
            "contents".to_string(),
            Value::Array(pages.into_iter().map(Value::String).collect()),
        );
        if let Some(credit) = credit {
            fields.insert("credit".to_string(), Value::String(credit));
        }
        Self(fields)
    }

    /// Page texts in reading order (may contain `§` formatting codes)
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("contents")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(|page| page.as_str().unwrap_or_default())
    }

    /// Optional trailing credit line
    pub fn credit(&self) -> Option<&str> {
        self.0.get("credit").and_then(Value::as_str)
    }

    /// Any field of the fetched document
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

/// Who wrote a book, as declared in its metadata file
///
/// Accepts three JSON shapes:
/// - `"Some Name"`: a literal author
/// - `{"translate": "key"}`: a key to look up in the localization tables
/// - anything else: kept verbatim, resolves to "Unknown"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorReference {
    Literal(String),
    Translated { translate: String },
    Unrecognized(Value),
}

/// Per-book metadata document (`meta.json`)
///
/// Only a JSON object is metadata; any other shape fails to decode and the
/// book simply has no author.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct BookMeta {
    pub author: Option<AuthorReference>,
}

impl From<Map<String, Value>> for BookMeta {
    fn from(mut fields: Map<String, Value>) -> Self {
        let author = fields
            .remove("author")
            .filter(|value| !value.is_null())
            .and_then(|value| serde_json::from_value(value).ok());
        Self { author }
    }
}

/// Everything fetched in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateDocument {
    /// When the document was finalized
    pub generated_at: DateTime<Utc>,

    /// Book ids in discovery order
    #[serde(default)]
    pub order: Vec<String>,

    /// Namespace-filtered localization tables
    #[serde(default)]
    pub translations: Translations,

    /// Author references for books whose metadata declared one
    #[serde(default)]
    pub authors: BTreeMap<String, AuthorReference>,

    /// Every discovered book, with whatever languages could be fetched
    #[serde(default)]
    pub books: BTreeMap<String, BookContents>,
}

impl AggregateDocument {
    /// Book ids in render order: discovery order if recorded, otherwise sorted
    pub fn book_ids(&self) -> Vec<String> {
        if self.order.is_empty() {
            self.books.keys().cloned().collect()
        } else {
            self.order.clone()
        }
    }

    /// Content for a book in one language, if it was fetched
    pub fn content(&self, book_id: &str, language: &Language) -> Option<&LocalizedContent> {
        self.books.get(book_id).and_then(|langs| langs.get(language))
    }
}

/// Incrementally populated document, finalized once fetching is done
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    order: Vec<String>,
    translations: Translations,
    authors: BTreeMap<String, AuthorReference>,
    books: BTreeMap<String, BookContents>,
}

impl DocumentBuilder {
    /// Start a document for the discovered books (each gets an empty entry)
    pub fn new(book_ids: &[String]) -> Self {
        Self {
            order: book_ids.to_vec(),
            books: book_ids
                .iter()
                .map(|id| (id.clone(), BookContents::new()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn set_table(&mut self, language: Language, table: LocalizationTable) {
        self.translations.insert(language, table);
    }

    pub fn set_author(&mut self, book_id: &str, author: AuthorReference) {
        self.authors.insert(book_id.to_string(), author);
    }

    pub fn set_content(&mut self, book_id: &str, language: Language, content: LocalizedContent) {
        self.books
            .entry(book_id.to_string())
            .or_default()
            .insert(language, content);
    }

    /// Languages recorded so far for a book
    pub fn languages_for(&self, book_id: &str) -> Vec<&Language> {
        self.books
            .get(book_id)
            .map(|langs| langs.keys().collect())
            .unwrap_or_default()
    }

    /// Stamp the generation time and produce the final document
    pub fn finish(self) -> AggregateDocument {
        AggregateDocument {
            generated_at: Utc::now(),
            order: self.order,
            translations: self.translations,
            authors: self.authors,
            books: self.books,
        }
    }
}
