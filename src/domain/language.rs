//! Supported languages and the default-language fallback.
//!
//! The set of languages is configuration, not code: an ordered list of
//! locale codes plus one designated default that every lookup falls back to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A locale code as used by the mod's language files (e.g. `en_us`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language from a locale code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the raw locale code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Errors building a language set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageSetError {
    #[error("Language set is empty")]
    Empty,

    #[error("Language '{0}' is listed more than once")]
    Duplicate(Language),

    #[error("Default language '{0}' is not one of the supported languages")]
    DefaultNotSupported(Language),
}

/// Ordered, closed set of supported languages with a designated default
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSet {
    codes: Vec<Language>,
    default: Language,
}

impl LanguageSet {
    /// Build a language set, validating membership of the default
    pub fn new(codes: Vec<Language>, default: Language) -> Result<Self, LanguageSetError> {
        if codes.is_empty() {
            return Err(LanguageSetError::Empty);
        }

        for (i, code) in codes.iter().enumerate() {
            if codes[..i].contains(code) {
                return Err(LanguageSetError::Duplicate(code.clone()));
            }
        }

        if !codes.contains(&default) {
            return Err(LanguageSetError::DefaultNotSupported(default));
        }

        Ok(Self { codes, default })
    }

    /// Languages in fetch order
    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.codes.iter()
    }

    /// The fallback language for every lookup
    pub fn default_language(&self) -> &Language {
        &self.default
    }

    pub fn contains(&self, language: &Language) -> bool {
        self.codes.contains(language)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self {
            codes: vec![
                Language::new("en_us"),
                Language::new("ru_ru"),
                Language::new("zh_cn"),
            ],
            default: Language::new("en_us"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = LanguageSet::default();
        let codes: Vec<&str> = set.iter().map(Language::as_str).collect();
        assert_eq!(codes, vec!["en_us", "ru_ru", "zh_cn"]);
        assert_eq!(set.default_language().as_str(), "en_us");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_default_must_be_member() {
        let err = LanguageSet::new(vec!["ru_ru".into()], "en_us".into()).unwrap_err();
        assert_eq!(err, LanguageSetError::DefaultNotSupported("en_us".into()));
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        assert_eq!(
            LanguageSet::new(vec![], "en_us".into()).unwrap_err(),
            LanguageSetError::Empty
        );
        assert_eq!(
            LanguageSet::new(vec!["en_us".into(), "en_us".into()], "en_us".into()).unwrap_err(),
            LanguageSetError::Duplicate("en_us".into())
        );
    }

    #[test]
    fn test_language_serializes_as_plain_string() {
        let json = serde_json::to_string(&Language::new("de_de")).unwrap();
        assert_eq!(json, "\"de_de\"");
    }
}
