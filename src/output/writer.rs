//! Writes the data file and the HTML page to the output directory.
//!
//! Existing files are overwritten unconditionally.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs;

use crate::domain::AggregateDocument;

/// Output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPaths {
    /// Directory both files are written to (created if missing)
    pub dir: PathBuf,
    /// Data file name inside `dir`
    pub data_file: String,
    /// HTML file name inside `dir`
    pub html_file: String,
}

impl OutputPaths {
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(&self.data_file)
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(&self.html_file)
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
            data_file: "lore.json".to_string(),
            html_file: "lore.html".to_string(),
        }
    }
}

/// Paths actually written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub data: PathBuf,
    pub html: PathBuf,
}

/// Write both artifacts
pub async fn write_outputs(
    paths: &OutputPaths,
    document: &AggregateDocument,
    html: &str,
) -> Result<WrittenFiles> {
    ensure_dir(paths).await?;

    let data = paths.data_path();
    let json = serde_json::to_string_pretty(document).context("Failed to serialize document")?;
    write_file(&data, &json).await?;

    let html = write_html(paths, html).await?;

    Ok(WrittenFiles { data, html })
}

/// Write only the HTML page
pub async fn write_html(paths: &OutputPaths, html: &str) -> Result<PathBuf> {
    ensure_dir(paths).await?;

    let html_path = paths.html_path();
    write_file(&html_path, html).await?;
    Ok(html_path)
}

/// Read a previously written data file
pub async fn read_document(path: &Path) -> Result<AggregateDocument> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))
}

async fn ensure_dir(paths: &OutputPaths) -> Result<()> {
    fs::create_dir_all(&paths.dir)
        .await
        .with_context(|| format!("Failed to create output directory: {}", paths.dir.display()))
}

async fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
