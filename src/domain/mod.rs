//! Domain types for the lore-book export.
//!
//! This module contains the core data structures:
//! - Language: locale codes and the supported set with its default
//! - Document: fetched tables, author references and book contents

pub mod document;
pub mod language;

// Re-export commonly used types
pub use document::{
    AggregateDocument, AuthorReference, BookContents, BookMeta, DocumentBuilder,
    LocalizationTable, LocalizedContent, Translations,
};
pub use language::{Language, LanguageSet, LanguageSetError};
