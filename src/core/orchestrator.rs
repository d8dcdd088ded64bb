//! Main orchestrator for an export run.
//!
//! Coordinates aggregation, rendering and writing. Nothing touches the
//! output directory until aggregation has succeeded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::adapters::JsonSource;
use crate::config::ResolvedConfig;
use crate::domain::AggregateDocument;
use crate::output::{read_document, write_html, write_outputs, HtmlRenderer, WrittenFiles};

use super::aggregate::Aggregator;

/// Summary of a completed build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Books discovered in the repository
    pub books: usize,
    /// Books that made it onto the HTML page
    pub rendered: usize,
    /// Files written
    pub written: WrittenFiles,
}

/// Runs the full export against a source
pub struct Orchestrator<'a> {
    source: &'a dyn JsonSource,
    config: &'a ResolvedConfig,
}

impl<'a> Orchestrator<'a> {
    pub fn new(source: &'a dyn JsonSource, config: &'a ResolvedConfig) -> Self {
        Self { source, config }
    }

    /// Fetch, render and write both artifacts
    #[instrument(skip(self), fields(source = %self.source.name()))]
    pub async fn build(&self) -> Result<BuildReport> {
        let layout = self.config.layout()?;

        let document = Aggregator::new(
            self.source,
            &layout,
            &self.config.languages,
            &self.config.namespace,
        )
        .run()
        .await
        .context("Book discovery failed")?;

        let book_ids = document.book_ids();
        let renderer = self.renderer();
        let html = renderer.render(&document, &book_ids);
        let rendered = renderer.rendered_count(&document, &book_ids);

        let written = write_outputs(&self.config.output, &document, &html).await?;
        info!("✓ Wrote {}", written.data.display());
        info!("✓ Wrote {} ({} books)", written.html.display(), rendered);

        Ok(BuildReport {
            books: book_ids.len(),
            rendered,
            written,
        })
    }

    fn renderer(&self) -> HtmlRenderer<'a> {
        HtmlRenderer::new(&self.config.page, &self.config.languages, &self.config.namespace)
    }
}

/// Re-render the HTML page from an existing data file, without fetching
#[instrument(skip(config))]
pub async fn render_from_file(config: &ResolvedConfig, data_path: &Path) -> Result<PathBuf> {
    let document: AggregateDocument = read_document(data_path).await?;
    let book_ids = document.book_ids();

    let renderer = HtmlRenderer::new(&config.page, &config.languages, &config.namespace);
    let html = renderer.render(&document, &book_ids);

    let html_path = write_html(&config.output, &html).await?;

    info!(
        "✓ Wrote {} ({} books)",
        html_path.display(),
        renderer.rendered_count(&document, &book_ids)
    );
    Ok(html_path)
}
