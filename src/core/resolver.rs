//! Display-name resolution for book titles and authors.
//!
//! Lookups try the requested language first, then the default language.
//! An empty translation counts as missing. Neither operation can fail.

use std::collections::BTreeMap;

use crate::domain::{AuthorReference, Language, Translations};

/// Returned when an author cannot be resolved
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Resolves titles and authors against a set of localization tables
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    translations: &'a Translations,
    default_language: &'a Language,
    namespace: &'a str,
}

impl<'a> Resolver<'a> {
    pub fn new(translations: &'a Translations, default_language: &'a Language, namespace: &'a str) -> Self {
        Self {
            translations,
            default_language,
            namespace,
        }
    }

    /// Translation key holding a book's title
    pub fn title_key(&self, book_id: &str) -> String {
        format!("{}.{}", self.namespace, book_id)
    }

    /// Two-tier lookup: requested language, then default language
    pub fn lookup(&self, key: &str, language: &Language) -> Option<&'a str> {
        let find = |lang: &Language| {
            self.translations
                .get(lang)
                .and_then(|table| table.get(key))
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };

        find(language).or_else(|| find(self.default_language))
    }

    /// Book title, falling back to the id with underscores as spaces
    pub fn title(&self, book_id: &str, language: &Language) -> String {
        match self.lookup(&self.title_key(book_id), language) {
            Some(title) => title.to_string(),
            None => book_id.replace('_', " "),
        }
    }

    /// Book author, or "Unknown" when absent or unresolvable
    pub fn author(
        &self,
        book_id: &str,
        authors: &BTreeMap<String, AuthorReference>,
        language: &Language,
    ) -> String {
        match authors.get(book_id) {
            None => UNKNOWN_AUTHOR.to_string(),
            Some(AuthorReference::Literal(name)) => name.clone(),
            Some(AuthorReference::Translated { translate }) => self
                .lookup(translate, language)
                .unwrap_or(UNKNOWN_AUTHOR)
                .to_string(),
            Some(AuthorReference::Unrecognized(_)) => UNKNOWN_AUTHOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tables() -> Translations {
        let mut translations = Translations::new();
        translations.insert(
            Language::new("en_us"),
            [
                ("ns.foo".to_string(), "Foo Title".to_string()),
                ("ns.empty".to_string(), String::new()),
                ("author.sailor".to_string(), "The Old Sailor".to_string()),
            ]
            .into_iter()
            .collect(),
        );
        translations.insert(
            Language::new("ru_ru"),
            [
                ("ns.foo".to_string(), "Заголовок".to_string()),
                ("ns.empty".to_string(), String::new()),
            ]
            .into_iter()
            .collect(),
        );
        translations
    }

    fn authors() -> BTreeMap<String, AuthorReference> {
        [
            ("foo".to_string(), AuthorReference::Literal("Jane Quill".to_string())),
            (
                "sea".to_string(),
                AuthorReference::Translated {
                    translate: "author.sailor".to_string(),
                },
            ),
            (
                "lost".to_string(),
                AuthorReference::Translated {
                    translate: "author.nobody".to_string(),
                },
            ),
            ("odd".to_string(), AuthorReference::Unrecognized(json!([1]))),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_title_in_requested_language() {
        let tables = tables();
        let en = Language::new("en_us");
        let resolver = Resolver::new(&tables, &en, "ns");

        assert_eq!(resolver.title("foo", &en), "Foo Title");
        assert_eq!(resolver.title("foo", &Language::new("ru_ru")), "Заголовок");
    }

    #[test]
    fn test_title_falls_back_to_default_language() {
        let tables = tables();
        let en = Language::new("en_us");
        let resolver = Resolver::new(&tables, &en, "ns");

        assert_eq!(resolver.title("foo", &Language::new("xx_xx")), "Foo Title");
    }

    #[test]
    fn test_title_derived_from_id() {
        let tables = tables();
        let en = Language::new("en_us");
        let resolver = Resolver::new(&tables, &en, "ns");

        assert_eq!(resolver.title("bar_baz", &en), "bar baz");
        assert_eq!(resolver.title("empty", &Language::new("ru_ru")), "empty");
    }

    #[test]
    fn test_title_without_any_tables() {
        let tables = Translations::new();
        let en = Language::new("en_us");
        let resolver = Resolver::new(&tables, &en, "ns");

        assert_eq!(resolver.title("the_last_voyage", &en), "the last voyage");
    }

    #[test]
    fn test_author_resolution() {
        let tables = tables();
        let authors = authors();
        let en = Language::new("en_us");
        let ru = Language::new("ru_ru");
        let resolver = Resolver::new(&tables, &en, "ns");

        assert_eq!(resolver.author("missing", &authors, &en), "Unknown");
        assert_eq!(resolver.author("foo", &authors, &ru), "Jane Quill");
        // ru_ru has no author key, falls back to en_us
        assert_eq!(resolver.author("sea", &authors, &ru), "The Old Sailor");
        assert_eq!(resolver.author("lost", &authors, &en), "Unknown");
        assert_eq!(resolver.author("odd", &authors, &en), "Unknown");
    }
}
