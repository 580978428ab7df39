//! Open Graph and Twitter Card extraction.
//!
//! This module extracts the named social-sharing fields and collects every
//! other `og:*` / `twitter:*` meta entry into an ordered mapping.

use scraper::Selector;
use std::sync::LazyLock;

use super::document::{non_empty_trimmed, PageDocument};
use crate::models::{RawOpenGraph, RawTwitterCard, SocialMetaMap};
use crate::utils::parse_selector_unsafe;

const OG_PREFIX: &str = "og:";
const TWITTER_PREFIX: &str = "twitter:";

/// Open Graph keys with a dedicated field, read from the `property` attribute.
pub const NAMED_OPEN_GRAPH_KEYS: [&str; 4] = ["og:title", "og:description", "og:image", "og:url"];

/// Twitter Card keys with a dedicated field, read from the `name` attribute.
pub const NAMED_TWITTER_KEYS: [&str; 4] = [
    "twitter:card",
    "twitter:title",
    "twitter:description",
    "twitter:image",
];

static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta", "META_SELECTOR"));

static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property="og:title"]"#, "OG_TITLE_SELECTOR")
});
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property="og:description"]"#, "OG_DESCRIPTION_SELECTOR")
});
static OG_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[property="og:image"]"#, "OG_IMAGE_SELECTOR")
});
static OG_URL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"meta[property="og:url"]"#, "OG_URL_SELECTOR"));

static TWITTER_CARD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[name="twitter:card"]"#, "TWITTER_CARD_SELECTOR")
});
static TWITTER_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[name="twitter:title"]"#, "TWITTER_TITLE_SELECTOR")
});
static TWITTER_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        r#"meta[name="twitter:description"]"#,
        "TWITTER_DESCRIPTION_SELECTOR",
    )
});
static TWITTER_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(r#"meta[name="twitter:image"]"#, "TWITTER_IMAGE_SELECTOR")
});

/// Extracts `og:title`, `og:description`, `og:image` and `og:url`.
///
/// Looks up `<meta property="og:*">` and reads the `content` of the first match
/// as written (not trimmed); an empty value is `None`. No fallback is applied here.
pub fn extract_open_graph(document: &PageDocument) -> RawOpenGraph {
    RawOpenGraph {
        title: document.first_attr_as_is(&OG_TITLE_SELECTOR, "content"),
        description: document.first_attr_as_is(&OG_DESCRIPTION_SELECTOR, "content"),
        image: document.first_attr_as_is(&OG_IMAGE_SELECTOR, "content"),
        url: document.first_attr_as_is(&OG_URL_SELECTOR, "content"),
    }
}

/// Extracts `twitter:card`, `twitter:title`, `twitter:description` and `twitter:image`.
///
/// Twitter tags are looked up by the `name` attribute, not `property`. Values
/// are kept as written, like the Open Graph ones.
pub fn extract_twitter_card(document: &PageDocument) -> RawTwitterCard {
    RawTwitterCard {
        card: document.first_attr_as_is(&TWITTER_CARD_SELECTOR, "content"),
        title: document.first_attr_as_is(&TWITTER_TITLE_SELECTOR, "content"),
        description: document.first_attr_as_is(&TWITTER_DESCRIPTION_SELECTOR, "content"),
        image: document.first_attr_as_is(&TWITTER_IMAGE_SELECTOR, "content"),
    }
}

/// Collects every extra `og:*` / `twitter:*` meta entry.
///
/// Scans all `<meta>` elements with a non-blank `content`. The `property` and
/// the `name` attribute are checked separately, so one element can contribute
/// two keys. A key is skipped only when it arrives through the attribute its
/// dedicated field is read from ([`NAMED_OPEN_GRAPH_KEYS`] via `property`,
/// [`NAMED_TWITTER_KEYS`] via `name`); `<meta property="twitter:title">` or
/// `<meta name="og:title">` are recorded here. A later duplicate key
/// overwrites the earlier value but keeps its position.
pub fn extract_extra_social_meta(document: &PageDocument) -> SocialMetaMap {
    document
        .select_all(&META_SELECTOR)
        .fold(SocialMetaMap::new(), |map, element| {
            let meta = element.value();
            let Some(content) = meta.attr("content").and_then(non_empty_trimmed) else {
                return map;
            };

            [
                (meta.attr("property"), &NAMED_OPEN_GRAPH_KEYS as &[&str]),
                (meta.attr("name"), &NAMED_TWITTER_KEYS as &[&str]),
            ]
            .into_iter()
            .filter_map(|(key, named)| key.filter(|key| is_extra_social_key(key, named)))
            .fold(map, |map, key| map.with(key, content.as_str()))
        })
}

fn is_extra_social_key(key: &str, named: &[&str]) -> bool {
    (key.starts_with(OG_PREFIX) || key.starts_with(TWITTER_PREFIX)) && !named.contains(&key)
}
