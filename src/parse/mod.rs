//! HTML parsing and field extraction.
//!
//! This module extracts the SEO and social-sharing fields from a parsed page:
//! - Basic SEO elements (title, meta description, canonical, h1, lang, robots, viewport)
//! - Open Graph tags (`meta[property="og:*"]`)
//! - Twitter Card tags (`meta[name="twitter:*"]`)
//! - Every other `og:*` / `twitter:*` meta entry, in document order
//!
//! All parsing is done using CSS selectors via the `scraper` crate. Extraction
//! never fails: a missing element is reported as `None`.

mod document;
mod html;
mod social;

use log::debug;

use crate::models::RawFields;

// Re-export public API
pub use document::PageDocument;
pub use html::{
    extract_canonical, extract_first_heading, extract_language, extract_meta_description,
    extract_robots, extract_title, extract_viewport,
};
pub use social::{
    extract_extra_social_meta, extract_open_graph, extract_twitter_card, NAMED_OPEN_GRAPH_KEYS,
    NAMED_TWITTER_KEYS,
};

/// Extracts every audited field from a parsed document.
///
/// Each rule is independent; the result holds values exactly as found (trimmed),
/// without the image/url fallbacks.
pub fn extract_fields(document: &PageDocument) -> RawFields {
    let fields = RawFields {
        title: extract_title(document),
        meta_description: extract_meta_description(document),
        canonical: extract_canonical(document),
        first_heading: extract_first_heading(document),
        language: extract_language(document),
        robots: extract_robots(document),
        viewport: extract_viewport(document),
        open_graph: extract_open_graph(document),
        twitter_card: extract_twitter_card(document),
        extra_social_meta: extract_extra_social_meta(document),
    };

    debug!(
        "Extracted fields: title={:?}, description={} chars, canonical={:?}, lang={:?}, {} extra social tags",
        fields.title,
        fields
            .meta_description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0),
        fields.canonical,
        fields.language,
        fields.extra_social_meta.len()
    );

    fields
}
