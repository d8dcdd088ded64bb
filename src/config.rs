//! Configuration for the lore-book export.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags and their environment variables
//!    (LOREBOOK_REPOSITORY, LOREBOOK_BRANCH, LOREBOOK_OUTPUT_DIR)
//! 2. Config file (.lorebook/config.yaml, or --config)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .lorebook/config.yaml
//! - Relative output paths in the file resolve against the project root
//!   (the directory containing .lorebook/)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::github::{RepoLayout, DEFAULT_API_BASE, DEFAULT_RAW_BASE};
use crate::domain::{Language, LanguageSet};
use crate::output::{OutputPaths, PageSettings};

/// Translation key namespace for book titles
pub const DEFAULT_NAMESPACE: &str = "book";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub languages: Option<LanguagesConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    /// `owner/name` of the mod repository
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub books_dir: Option<String>,
    pub lang_dir: Option<String>,
    pub meta_file: Option<String>,
    pub api_base: Option<String>,
    pub raw_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguagesConfig {
    pub codes: Vec<String>,
    pub default: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Output directory (relative to the project root)
    pub dir: Option<String>,
    pub data_file: Option<String>,
    pub html_file: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageConfig {
    pub title: Option<String>,
    pub canonical_url: Option<String>,
    pub back_href: Option<String>,
}

/// Values given on the command line (or through their env vars)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub output_dir: Option<PathBuf>,
}

/// Resolved configuration
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    /// `owner/name`, required only when fetching
    pub repository: Option<String>,
    pub branch: String,
    pub books_dir: String,
    pub lang_dir: String,
    pub meta_file: String,
    pub api_base: String,
    pub raw_base: String,
    pub namespace: String,
    pub languages: LanguageSet,
    pub output: OutputPaths,
    pub page: PageSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Repository layout for fetching; fails if no repository is configured
    pub fn layout(&self) -> Result<RepoLayout> {
        let repository = self.repository.as_deref().context(
            "No source repository configured: set source.repository in .lorebook/config.yaml or pass --repo",
        )?;
        let (owner, repo) = parse_repository(repository)?;

        Ok(RepoLayout {
            api_base: self.api_base.clone(),
            raw_base: self.raw_base.clone(),
            owner,
            repo,
            branch: self.branch.clone(),
            books_dir: self.books_dir.clone(),
            lang_dir: self.lang_dir.clone(),
            meta_file: self.meta_file.clone(),
        })
    }
}

/// Split `owner/name` into its parts
pub fn parse_repository(repository: &str) -> Result<(String, String)> {
    match repository.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => anyhow::bail!("Invalid repository '{}': expected owner/name", repository),
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".lorebook").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Directory that relative paths in a config file are resolved against
fn project_root(config_path: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or(Path::new("."));
    if parent.file_name().is_some_and(|name| name == ".lorebook") {
        parent.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}

/// Load configuration from all sources
pub fn load_config(overrides: &ConfigOverrides) -> Result<ResolvedConfig> {
    let config_file = overrides.config_path.clone().or_else(find_config_file);

    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    resolve(config_file, file, overrides)
}

/// Merge a parsed config file (if any) with overrides and defaults
fn resolve(
    config_file: Option<PathBuf>,
    file: Option<ConfigFile>,
    overrides: &ConfigOverrides,
) -> Result<ResolvedConfig> {
    let base_dir = config_file
        .as_deref()
        .map(project_root)
        .unwrap_or_else(|| PathBuf::from("."));
    let file = file.unwrap_or_else(|| ConfigFile {
        version: "1".to_string(),
        source: SourceConfig::default(),
        namespace: None,
        languages: None,
        output: OutputConfig::default(),
        page: PageConfig::default(),
    });

    let source = file.source;
    let languages = match file.languages {
        Some(languages) => LanguageSet::new(
            languages.codes.into_iter().map(Language::new).collect(),
            Language::new(languages.default),
        )
        .context("Invalid language configuration")?,
        None => LanguageSet::default(),
    };

    let defaults = OutputPaths::default();
    let dir = if let Some(ref dir) = overrides.output_dir {
        dir.clone()
    } else if let Some(ref dir) = file.output.dir {
        resolve_path(&base_dir, dir)
    } else if config_file.is_some() {
        base_dir.join(&defaults.dir)
    } else {
        defaults.dir
    };
    let output = OutputPaths {
        dir,
        data_file: file.output.data_file.unwrap_or(defaults.data_file),
        html_file: file.output.html_file.unwrap_or(defaults.html_file),
    };

    let page_defaults = PageSettings::default();
    let page = PageSettings {
        title: file.page.title.unwrap_or(page_defaults.title),
        canonical_url: file
            .page
            .canonical_url
            .unwrap_or_else(|| output.html_file.clone()),
        back_href: file.page.back_href.unwrap_or(page_defaults.back_href),
    };

    let repository = overrides.repository.clone().or(source.repository);
    if let Some(ref repository) = repository {
        parse_repository(repository)?;
    }

    Ok(ResolvedConfig {
        repository,
        branch: overrides
            .branch
            .clone()
            .or(source.branch)
            .unwrap_or_else(|| "main".to_string()),
        books_dir: source.books_dir.unwrap_or_else(|| "books".to_string()),
        lang_dir: source.lang_dir.unwrap_or_else(|| "lang".to_string()),
        meta_file: source.meta_file.unwrap_or_else(|| "meta.json".to_string()),
        api_base: source.api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        raw_base: source.raw_base.unwrap_or_else(|| DEFAULT_RAW_BASE.to_string()),
        namespace: file.namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
        languages,
        output,
        page,
        config_file,
    })
}
