//! Queryable document handle.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
///
/// Wraps `scraper::Html` and exposes the lookups the extractors need as
/// `Option`-returning queries. Parsing never fails: malformed markup yields a
/// best-effort tree.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses raw markup into a document tree.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// First element matching `selector`, in document order.
    pub fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// All elements matching `selector`, in document order.
    pub fn select_all<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// Trimmed text content of the first match, `None` if absent or blank.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector)
            .and_then(|element| non_empty_trimmed(&element.text().collect::<String>()))
    }

    /// Trimmed `attr` value of the first match.
    ///
    /// Only the first matching element is consulted: if it lacks the attribute
    /// the result is `None` even when a later element carries it.
    pub fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.first(selector)
            .and_then(|element| element.value().attr(attr))
            .and_then(non_empty_trimmed)
    }

    /// `attr` value of the first match exactly as written.
    ///
    /// Same first-element rule as [`first_attr`](Self::first_attr), without
    /// trimming; only an empty value maps to `None`.
    pub fn first_attr_as_is(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.first(selector)
            .and_then(|element| element.value().attr(attr))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Trimmed `attr` value of the root `<html>` element.
    pub fn root_attr(&self, attr: &str) -> Option<String> {
        self.html
            .root_element()
            .value()
            .attr(attr)
            .and_then(non_empty_trimmed)
    }
}

/// Trims `value`, mapping an empty result to `None`.
pub(crate) fn non_empty_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
