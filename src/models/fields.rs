//! Field snapshots for one document.

use serde::Serialize;

use super::SocialMetaMap;
use crate::config::PLACEHOLDER_IMAGE_URL;

/// Open Graph values as found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

/// Twitter Card values as found in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTwitterCard {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Output of the extraction stage, before any fallback is applied.
///
/// Every string is trimmed and `None` stands for "absent or empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical: Option<String>,
    pub first_heading: Option<String>,
    pub language: Option<String>,
    pub robots: Option<String>,
    pub viewport: Option<String>,
    pub open_graph: RawOpenGraph,
    pub twitter_card: RawTwitterCard,
    pub extra_social_meta: SocialMetaMap,
}

/// Open Graph values after defaulting.
///
/// `image` and `url` are always present: a missing `og:image` becomes the
/// placeholder image and a missing `og:url` becomes the analyzed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: String,
    pub url: String,
}

/// Twitter Card values after defaulting.
///
/// `image` falls back to the Open Graph image (itself possibly the placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: String,
}

/// Immutable snapshot of the metadata of one analyzed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub canonical: Option<String>,
    pub first_heading: Option<String>,
    pub language: Option<String>,
    pub robots: Option<String>,
    pub viewport: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter_card: TwitterCard,
    pub extra_social_meta: SocialMetaMap,
}

impl ExtractedFields {
    /// Applies the image/url fallbacks to raw values.
    ///
    /// Because the fallbacks run before evaluation, `og:image`, `og:url` and
    /// `twitter:image` can never make the Open Graph or Twitter Card checks
    /// incomplete; only missing titles, descriptions or card type can.
    ///
    /// # Arguments
    ///
    /// * `raw` - Values as extracted from the document
    /// * `source_url` - The analyzed URL, used when `og:url` is absent
    pub fn with_defaults(raw: RawFields, source_url: &str) -> Self {
        let og_image = raw
            .open_graph
            .image
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        let og_url = raw.open_graph.url.unwrap_or_else(|| source_url.to_string());
        let twitter_image = raw.twitter_card.image.unwrap_or_else(|| og_image.clone());

        Self {
            title: raw.title,
            meta_description: raw.meta_description,
            canonical: raw.canonical,
            first_heading: raw.first_heading,
            language: raw.language,
            robots: raw.robots,
            viewport: raw.viewport,
            open_graph: OpenGraph {
                title: raw.open_graph.title,
                description: raw.open_graph.description,
                image: og_image,
                url: og_url,
            },
            twitter_card: TwitterCard {
                card: raw.twitter_card.card,
                title: raw.twitter_card.title,
                description: raw.twitter_card.description,
                image: twitter_image,
            },
            extra_social_meta: raw.extra_social_meta,
        }
    }
}
