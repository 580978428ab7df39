//! Preview card data.
//!
//! Mirrors what a link looks like when shared: a generic website card and one
//! card per social platform, each with its own fallback chain.

use serde::Serialize;
use std::fmt;

use crate::models::ExtractedFields;

const NO_TITLE_FOUND: &str = "No Title Found";
const NO_DESCRIPTION_FOUND: &str = "No Description Found";
const NO_TITLE: &str = "No Title";
const NO_DESCRIPTION: &str = "No Description";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Website,
    Facebook,
    Twitter,
    TikTok,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Website => "Website",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
        };
        f.write_str(name)
    }
}

/// One rendered preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub platform: Platform,
    pub image: String,
    pub title: String,
    pub description: String,
    /// Link target, only shown on the website card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Builds the website, Facebook, Twitter and TikTok cards, in that order.
pub fn build_previews(fields: &ExtractedFields) -> Vec<PreviewCard> {
    let og = &fields.open_graph;
    let twitter = &fields.twitter_card;

    let website = PreviewCard {
        platform: Platform::Website,
        image: og.image.clone(),
        title: first_of(&[og.title.as_deref(), fields.title.as_deref()], NO_TITLE_FOUND),
        description: first_of(
            &[og.description.as_deref(), fields.meta_description.as_deref()],
            NO_DESCRIPTION_FOUND,
        ),
        url: Some(og.url.clone()),
    };

    let og_card = |platform| PreviewCard {
        platform,
        image: og.image.clone(),
        title: first_of(&[og.title.as_deref()], NO_TITLE),
        description: first_of(&[og.description.as_deref()], NO_DESCRIPTION),
        url: None,
    };

    let twitter_card = PreviewCard {
        platform: Platform::Twitter,
        image: twitter.image.clone(),
        title: first_of(&[twitter.title.as_deref(), og.title.as_deref()], NO_TITLE),
        description: first_of(
            &[twitter.description.as_deref(), og.description.as_deref()],
            NO_DESCRIPTION,
        ),
        url: None,
    };

    vec![
        website,
        og_card(Platform::Facebook),
        twitter_card,
        og_card(Platform::TikTok),
    ]
}

fn first_of(candidates: &[Option<&str>], fallback: &str) -> String {
    candidates
        .iter()
        .flatten()
        .find(|c| !c.is_empty())
        .copied()
        .unwrap_or(fallback)
        .to_string()
}
