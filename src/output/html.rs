//! Static HTML rendering of the aggregate document.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Page text goes through [`strip_formatting_codes`] and [`escape_html`]
//! and is inserted pre-escaped so that newlines can become `<br>`; titles
//! and authors are stripped and left to maud's own escaping.
//!
//! Only books that have content in the default language are rendered.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

use crate::core::formatter::{escape_html, strip_formatting_codes};
use crate::core::resolver::Resolver;
use crate::domain::{AggregateDocument, LanguageSet, LocalizedContent};

const STYLE: &str = r#"
body { max-width: 46rem; margin: 0 auto; padding: 2rem 1rem; font-family: Georgia, "Times New Roman", serif; line-height: 1.6; color: #2b2118; background: #f4ecd8; }
a { color: #7a4b1c; }
nav.back { margin-bottom: 1.5rem; font-family: system-ui, sans-serif; font-size: 0.9rem; }
header.page-header h1 { margin: 0; }
header.page-header p { margin: 0.25rem 0 2rem; font-size: 0.85rem; color: #6b5a45; }
article.book { margin-bottom: 3rem; padding-bottom: 2rem; border-bottom: 1px solid #d4c4a0; }
article.book h2 { margin-bottom: 0.25rem; }
p.byline { margin-top: 0; font-style: italic; color: #6b5a45; }
div.page { margin: 1rem 0; padding: 1rem 1.25rem; background: #fbf6ea; border-left: 3px solid #c9a86a; }
p.credit { text-align: right; font-style: italic; }
"#;

/// Fixed page-shell settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSettings {
    /// Document and heading title
    pub title: String,
    /// Value of `<link rel="canonical">`
    pub canonical_url: String,
    /// Target of the back-navigation link
    pub back_href: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            title: "Lore Books".to_string(),
            canonical_url: "lore.html".to_string(),
            back_href: "../".to_string(),
        }
    }
}

/// Renders an `AggregateDocument` into a standalone HTML page
pub struct HtmlRenderer<'a> {
    page: &'a PageSettings,
    languages: &'a LanguageSet,
    namespace: &'a str,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(page: &'a PageSettings, languages: &'a LanguageSet, namespace: &'a str) -> Self {
        Self {
            page,
            languages,
            namespace,
        }
    }

    /// Render the page for the given books, in the given order
    pub fn render(&self, document: &AggregateDocument, book_ids: &[String]) -> String {
        self.render_markup(document, book_ids).into_string()
    }

    /// Number of books that will appear on the page
    pub fn rendered_count(&self, document: &AggregateDocument, book_ids: &[String]) -> usize {
        let language = self.languages.default_language();
        book_ids
            .iter()
            .filter(|id| document.content(id, language).is_some())
            .count()
    }

    fn render_markup(&self, document: &AggregateDocument, book_ids: &[String]) -> Markup {
        let language = self.languages.default_language();
        let resolver = Resolver::new(&document.translations, language, self.namespace);

        let books = html! {
            @for book_id in book_ids {
                @if let Some(content) = document.content(book_id, language) {
                    (render_book(
                        book_id,
                        &resolver.title(book_id, language),
                        &resolver.author(book_id, &document.authors, language),
                        content,
                    ))
                }
            }
        };

        let generated = document.generated_at.format("%Y-%m-%d %H:%M UTC").to_string();
        base_document(self.page, &generated, &document.generated_at.to_rfc3339(), books)
    }
}

/// Renders the fixed page shell around the book list
fn base_document(page: &PageSettings, generated: &str, generated_iso: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                meta name="description" content={ "Lore book texts, generated " (generated) };
                link rel="canonical" href=(page.canonical_url);
                style { (PreEscaped(STYLE)) }
            }
            body {
                nav.back {
                    a href=(page.back_href) { "← Back" }
                }
                header.page-header {
                    h1 { (page.title) }
                    p { "Generated " time datetime=(generated_iso) { (generated) } }
                }
                main {
                    (content)
                }
            }
        }
    }
}

/// Renders one book: heading, byline, pages and optional credit
fn render_book(book_id: &str, title: &str, author: &str, content: &LocalizedContent) -> Markup {
    html! {
        article.book id=(book_id) {
            h2 { (strip_formatting_codes(title)) }
            p.byline { "by " (strip_formatting_codes(author)) }
            @for page in content.pages() {
                @if let Some(page_html) = page_html(page) {
                    div.page { (PreEscaped(page_html)) }
                }
            }
            @if let Some(credit) = content.credit().and_then(credit_html) {
                p.credit { (PreEscaped(credit)) }
            }
        }
    }
}

/// Escaped page body with `<br>` line breaks, or `None` for a blank page
fn page_html(page: &str) -> Option<String> {
    let text = strip_formatting_codes(page);
    if text.trim().is_empty() {
        return None;
    }
    Some(escape_html(&text).replace('\n', "<br>"))
}

/// Escaped credit line with a leading hyphen shown as an em dash
fn credit_html(credit: &str) -> Option<String> {
    let text = strip_formatting_codes(credit);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let escaped = escape_html(text);
    Some(match escaped.strip_prefix('-') {
        Some(rest) => format!("—{}", rest),
        None => escaped,
    })
}
