//! Basic SEO element extraction.
//!
//! This module extracts the singular page-level elements:
//! - Page title and first `<h1>`
//! - Meta description, robots and viewport
//! - Canonical link
//! - Language attribute of the root element
//!
//! For each of them only the first matching element counts.

use scraper::Selector;
use std::sync::LazyLock;

use super::document::PageDocument;
use crate::utils::parse_selector_unsafe;

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const H1_SELECTOR_STR: &str = "h1";
const META_ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";
const META_VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_ROBOTS_SELECTOR_STR, "META_ROBOTS_SELECTOR"));
static META_VIEWPORT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_VIEWPORT_SELECTOR_STR, "META_VIEWPORT_SELECTOR")
});

/// Extracts the page title.
///
/// Returns the text content of the first `<title>` element, trimmed, or `None`
/// if there is no title or it is blank.
pub fn extract_title(document: &PageDocument) -> Option<String> {
    let title = document.first_text(&TITLE_SELECTOR);
    if title.is_none() {
        log::debug!("No title element found in document");
    }
    title
}

/// Extracts the `content` of the first `<meta name="description">`.
pub fn extract_meta_description(document: &PageDocument) -> Option<String> {
    document.first_attr(&META_DESCRIPTION_SELECTOR, "content")
}

/// Extracts the `href` of the first `<link rel="canonical">`.
pub fn extract_canonical(document: &PageDocument) -> Option<String> {
    document.first_attr(&CANONICAL_SELECTOR, "href")
}

/// Extracts the text of the first `<h1>` in document order.
pub fn extract_first_heading(document: &PageDocument) -> Option<String> {
    document.first_text(&H1_SELECTOR)
}

/// Extracts the `lang` attribute of the root `<html>` element.
pub fn extract_language(document: &PageDocument) -> Option<String> {
    document.root_attr("lang")
}

/// Extracts the `content` of the first `<meta name="robots">`.
pub fn extract_robots(document: &PageDocument) -> Option<String> {
    document.first_attr(&META_ROBOTS_SELECTOR, "content")
}

/// Extracts the `content` of the first `<meta name="viewport">`.
pub fn extract_viewport(document: &PageDocument) -> Option<String> {
    document.first_attr(&META_VIEWPORT_SELECTOR, "content")
}
