//! lorebook - Export mod lore books to JSON and HTML
//!
//! Downloads lore-book text and metadata for a game mod from its GitHub
//! repository, assembles everything into one JSON data file, and renders
//! a static HTML page of the default-language texts.
//!
//! # Architecture
//!
//! The export is a single sequential pass:
//! - Discovery lists book ids from the repository's books directory
//! - Localization tables are fetched per language and filtered to the
//!   book namespace
//! - Each book's metadata and per-language content are fetched in turn
//! - The aggregate is rendered to HTML and both files are written
//!
//! Individual fetch failures are logged and skipped; only a failed
//! directory listing aborts the run.
//!
//! # Modules
//!
//! - `adapters`: Remote document sources (GitHub)
//! - `core`: Discovery, aggregation, resolution, formatting, orchestration
//! - `domain`: Data structures (languages, aggregate document)
//! - `output`: HTML rendering and file writing
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Fetch everything and write public/lore.json + public/lore.html
//! GITHUB_TOKEN=... lorebook build --repo owner/mod
//!
//! # Re-render the page from the data file
//! lorebook render
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;

// Re-export main types at crate root for convenience
pub use adapters::{GitHubClient, JsonSource, RepoLayout};
pub use self::core::{Aggregator, DiscoveryError, Orchestrator, Resolver};
pub use domain::{AggregateDocument, AuthorReference, Language, LanguageSet, LocalizedContent};
