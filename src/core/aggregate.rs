//! Sequential aggregation of tables, metadata and book contents.
//!
//! One pass, one request at a time: listing, then one table per language,
//! then for each book its metadata followed by its content per language.

use tracing::{info, instrument, warn};

use crate::adapters::{fetch_typed, JsonSource, RepoLayout};
use crate::domain::{AggregateDocument, BookMeta, DocumentBuilder, LanguageSet, LocalizationTable, LocalizedContent};

use super::discovery::{discover_books, DiscoveryError};

/// Builds an `AggregateDocument` from a remote source
pub struct Aggregator<'a> {
    source: &'a dyn JsonSource,
    layout: &'a RepoLayout,
    languages: &'a LanguageSet,
    namespace: &'a str,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        source: &'a dyn JsonSource,
        layout: &'a RepoLayout,
        languages: &'a LanguageSet,
        namespace: &'a str,
    ) -> Self {
        Self {
            source,
            layout,
            languages,
            namespace,
        }
    }

    /// Fetch everything; only a failed listing is an error
    #[instrument(skip(self), fields(source = %self.source.name(), repo = %self.layout.repo))]
    pub async fn run(&self) -> Result<AggregateDocument, DiscoveryError> {
        let book_ids = discover_books(self.source, &self.layout.listing_url()).await?;
        let mut builder = DocumentBuilder::new(&book_ids);

        self.fetch_tables(&mut builder).await;

        for book_id in &book_ids {
            self.fetch_book(&mut builder, book_id).await;
        }

        Ok(builder.finish())
    }

    async fn fetch_tables(&self, builder: &mut DocumentBuilder) {
        let prefix = format!("{}.", self.namespace);

        for language in self.languages.iter() {
            let url = self.layout.table_url(language);
            match fetch_typed::<LocalizationTable>(self.source, &url).await {
                Some(table) => {
                    let table: LocalizationTable = table
                        .into_iter()
                        .filter(|(key, _)| key.starts_with(&prefix))
                        .collect();
                    info!("✓ Loaded {} table ({} keys)", language, table.len());
                    builder.set_table(language.clone(), table);
                }
                None => warn!("Could not load {} table", language),
            }
        }
    }

    async fn fetch_book(&self, builder: &mut DocumentBuilder, book_id: &str) {
        let meta_url = self.layout.meta_url(book_id);
        if let Some(BookMeta { author: Some(author) }) = fetch_typed(self.source, &meta_url).await {
            builder.set_author(book_id, author);
        }

        for language in self.languages.iter() {
            let url = self.layout.content_url(book_id, language);
            if let Some(content) = fetch_typed::<LocalizedContent>(self.source, &url).await {
                builder.set_content(book_id, language.clone(), content);
            }
        }

        let found = builder.languages_for(book_id);
        if found.is_empty() {
            info!("{}: none", book_id);
        } else {
            let found: Vec<&str> = found.iter().map(|l| l.as_str()).collect();
            info!("{}: {}", book_id, found.join(", "));
        }
    }
}
