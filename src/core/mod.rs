//! Core export logic.
//!
//! This module contains:
//! - Formatter: formatting-code stripping and HTML escaping
//! - Resolver: title and author lookup with language fallback
//! - Discovery: listing book ids
//! - Aggregate: sequential fetching into an AggregateDocument
//! - Orchestrator: aggregate, render and write

pub mod aggregate;
pub mod discovery;
pub mod formatter;
pub mod orchestrator;
pub mod resolver;

// Re-export commonly used types
pub use aggregate::Aggregator;
pub use discovery::{discover_books, DiscoveryError};
pub use formatter::{escape_html, strip_formatting_codes, FORMATTING_SENTINEL};
pub use orchestrator::{render_from_file, BuildReport, Orchestrator};
pub use resolver::{Resolver, UNKNOWN_AUTHOR};
