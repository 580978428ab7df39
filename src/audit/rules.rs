//! Per-field audit rules.

use std::ops::RangeInclusive;
use strum::IntoEnumIterator;

use super::types::{AuditCheck, AuditResult, AuditStatus};
use crate::config::{LOOKS_GOOD, META_DESCRIPTION_LENGTH_RANGE, TITLE_LENGTH_RANGE};
use crate::models::{ExtractedFields, OpenGraph, TwitterCard};

const MISSING_TITLE: &str = "Add a <title> tag to the page.";
const MISSING_META_DESCRIPTION: &str = "Add a meta description for better SEO.";
const MISSING_CANONICAL: &str = "Add a canonical tag to avoid duplicate content issues.";
const MISSING_H1: &str = "Add at least one <h1> tag for the main heading.";
const MISSING_LANGUAGE: &str =
    r#"Specify the language attribute in the <html> tag, e.g., <html lang="en">."#;
const MISSING_ROBOTS: &str = r#"Add a robots meta tag to control search engine crawling, e.g., <meta name="robots" content="index,follow">."#;
const MISSING_VIEWPORT: &str = "Add a viewport meta tag to ensure mobile responsiveness.";
const INCOMPLETE_TWITTER: &str = "Consider adding Twitter Card tags for better social sharing.";

/// Evaluates every check against the extracted fields.
///
/// Always returns nine results in [`AuditCheck`] order, whatever the document
/// contains.
pub fn evaluate(fields: &ExtractedFields) -> Vec<AuditResult> {
    AuditCheck::iter()
        .map(|check| evaluate_check(check, fields))
        .collect()
}

/// Evaluates a single check.
pub fn evaluate_check(check: AuditCheck, fields: &ExtractedFields) -> AuditResult {
    match check {
        AuditCheck::TitleTag => length_checked(
            check,
            fields.title.as_deref(),
            "Title length",
            TITLE_LENGTH_RANGE,
            MISSING_TITLE,
        ),
        AuditCheck::MetaDescription => length_checked(
            check,
            fields.meta_description.as_deref(),
            "Meta description",
            META_DESCRIPTION_LENGTH_RANGE,
            MISSING_META_DESCRIPTION,
        ),
        AuditCheck::CanonicalTag => presence(check, fields.canonical.as_deref(), MISSING_CANONICAL),
        AuditCheck::H1Tag => presence(check, fields.first_heading.as_deref(), MISSING_H1),
        AuditCheck::LanguageAttribute => {
            let mut result = presence(check, fields.language.as_deref(), MISSING_LANGUAGE);
            result.detail = fields.language.clone();
            result
        }
        AuditCheck::RobotsMetaTag => presence(check, fields.robots.as_deref(), MISSING_ROBOTS),
        AuditCheck::ViewportMetaTag => {
            presence(check, fields.viewport.as_deref(), MISSING_VIEWPORT)
        }
        AuditCheck::OpenGraphTags => {
            let missing = missing_open_graph_tags(&fields.open_graph);
            let suggestion = format!(
                "Ensure all required OG tags are present: og:title, og:description, og:image, and og:url. Missing: {}.",
                missing.join(", ")
            );
            completeness(check, missing.is_empty(), suggestion)
        }
        AuditCheck::TwitterCardTags => completeness(
            check,
            missing_twitter_tags(&fields.twitter_card).is_empty(),
            INCOMPLETE_TWITTER.to_string(),
        ),
    }
}

/// Required Open Graph tags that are absent after defaulting.
///
/// `og:image` and `og:url` carry fallbacks, so in practice only `og:title` and
/// `og:description` show up here.
fn missing_open_graph_tags(og: &OpenGraph) -> Vec<&'static str> {
    [
        ("og:title", is_present(og.title.as_deref())),
        ("og:description", is_present(og.description.as_deref())),
        ("og:image", is_present(Some(og.image.as_str()))),
        ("og:url", is_present(Some(og.url.as_str()))),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(tag, _)| tag)
    .collect()
}

fn missing_twitter_tags(twitter: &TwitterCard) -> Vec<&'static str> {
    [
        ("twitter:card", is_present(twitter.card.as_deref())),
        ("twitter:title", is_present(twitter.title.as_deref())),
        ("twitter:description", is_present(twitter.description.as_deref())),
        ("twitter:image", is_present(Some(twitter.image.as_str()))),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(tag, _)| tag)
    .collect()
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn result(check: AuditCheck, status: AuditStatus, suggestion: impl Into<String>) -> AuditResult {
    AuditResult {
        name: check.name(),
        status,
        detail: None,
        suggestion: suggestion.into(),
    }
}

fn presence(check: AuditCheck, value: Option<&str>, missing: &str) -> AuditResult {
    if is_present(value) {
        result(check, AuditStatus::Found, LOOKS_GOOD)
    } else {
        result(check, AuditStatus::Missing, missing)
    }
}

/// Presence check that also flags values outside `range` (in characters).
///
/// Too short and too long share one message naming both bounds.
fn length_checked(
    check: AuditCheck,
    value: Option<&str>,
    label: &str,
    range: RangeInclusive<usize>,
    missing: &str,
) -> AuditResult {
    match value.filter(|v| !v.is_empty()) {
        Some(v) if range.contains(&v.chars().count()) => {
            result(check, AuditStatus::Found, LOOKS_GOOD)
        }
        Some(_) => result(
            check,
            AuditStatus::Found,
            format!(
                "{} should be between {} and {} characters.",
                label,
                range.start(),
                range.end()
            ),
        ),
        None => result(check, AuditStatus::Missing, missing),
    }
}

fn completeness(check: AuditCheck, complete: bool, incomplete: String) -> AuditResult {
    if complete {
        result(check, AuditStatus::Complete, LOOKS_GOOD)
    } else {
        result(check, AuditStatus::Incomplete, incomplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawFields, RawOpenGraph, RawTwitterCard};

    fn fields(raw: RawFields) -> ExtractedFields {
        ExtractedFields::with_defaults(raw, "https://example.com/")
    }

    fn with_title(len: usize) -> ExtractedFields {
        fields(RawFields {
            title: Some("t".repeat(len)),
            ..Default::default()
        })
    }

    fn with_description(len: usize) -> ExtractedFields {
        fields(RawFields {
            meta_description: Some("d".repeat(len)),
            ..Default::default()
        })
    }

    #[test]
    fn test_always_nine_results_in_fixed_order() {
        let results = evaluate(&fields(RawFields::default()));
        let names: Vec<&str> = results.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "Title Tag",
                "Meta Description",
                "Canonical Tag",
                "H1 Tag",
                "Language Attribute",
                "Robots Meta Tag",
                "Viewport Meta Tag",
                "Open Graph Tags",
                "Twitter Card Tags",
            ]
        );
    }

    #[test]
    fn test_title_length_boundaries() {
        for len in [30, 45, 60] {
            let r = evaluate_check(AuditCheck::TitleTag, &with_title(len));
            assert_eq!(r.status, AuditStatus::Found);
            assert_eq!(r.suggestion, LOOKS_GOOD, "length {len}");
        }
        for len in [1, 29, 61, 200] {
            let r = evaluate_check(AuditCheck::TitleTag, &with_title(len));
            assert_eq!(r.status, AuditStatus::Found);
            assert_eq!(
                r.suggestion, "Title length should be between 30 and 60 characters.",
                "length {len}"
            );
        }
    }

    #[test]
    fn test_title_length_counts_characters_not_bytes() {
        // 30 two-byte characters is 60 bytes but only 30 characters
        let title = "é".repeat(30);
        let r = evaluate_check(
            AuditCheck::TitleTag,
            &fields(RawFields {
                title: Some(title),
                ..Default::default()
            }),
        );
        assert_eq!(r.suggestion, LOOKS_GOOD);
    }

    #[test]
    fn test_meta_description_length_boundaries() {
        for len in [50, 100, 160] {
            let r = evaluate_check(AuditCheck::MetaDescription, &with_description(len));
            assert_eq!(r.suggestion, LOOKS_GOOD, "length {len}");
        }
        for len in [49, 161] {
            let r = evaluate_check(AuditCheck::MetaDescription, &with_description(len));
            assert_eq!(r.status, AuditStatus::Found);
            assert_eq!(
                r.suggestion, "Meta description should be between 50 and 160 characters.",
                "length {len}"
            );
        }
    }

    #[test]
    fn test_missing_single_fields() {
        let results = evaluate(&fields(RawFields::default()));
        for r in &results[..7] {
            assert_eq!(r.status, AuditStatus::Missing, "{}", r.name);
            assert_ne!(r.suggestion, LOOKS_GOOD);
        }
        assert_eq!(results[0].suggestion, MISSING_TITLE);
        assert_eq!(results[1].suggestion, MISSING_META_DESCRIPTION);
        assert!(results[4].suggestion.contains(r#"<html lang="en">"#));
        assert_eq!(results[4].detail, None);
    }

    #[test]
    fn test_language_found_embeds_value() {
        let r = evaluate_check(
            AuditCheck::LanguageAttribute,
            &fields(RawFields {
                language: Some("en".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(r.status, AuditStatus::Found);
        assert_eq!(r.status_text(), "Found (en)");
        assert_eq!(r.suggestion, LOOKS_GOOD);
    }

    #[test]
    fn test_open_graph_complete_with_defaults() {
        // image and url absent, but defaults count as present
        let r = evaluate_check(
            AuditCheck::OpenGraphTags,
            &fields(RawFields {
                open_graph: RawOpenGraph {
                    title: Some("Title".to_string()),
                    description: Some("Description".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
        assert_eq!(r.status, AuditStatus::Complete);
        assert_eq!(r.suggestion, LOOKS_GOOD);
    }

    #[test]
    fn test_open_graph_incomplete_lists_missing_tags() {
        let r = evaluate_check(
            AuditCheck::OpenGraphTags,
            &fields(RawFields {
                open_graph: RawOpenGraph {
                    description: Some("Description".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
        assert_eq!(r.status, AuditStatus::Incomplete);
        assert!(r.suggestion.ends_with("Missing: og:title."));
    }

    #[test]
    fn test_open_graph_empty_source_url_counts_as_missing() {
        let extracted = ExtractedFields::with_defaults(
            RawFields {
                open_graph: RawOpenGraph {
                    title: Some("Title".to_string()),
                    description: Some("Description".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
            "",
        );
        let r = evaluate_check(AuditCheck::OpenGraphTags, &extracted);
        assert_eq!(r.status, AuditStatus::Incomplete);
        assert!(r.suggestion.ends_with("Missing: og:url."));
    }

    #[test]
    fn test_twitter_complete_with_image_fallback() {
        let r = evaluate_check(
            AuditCheck::TwitterCardTags,
            &fields(RawFields {
                twitter_card: RawTwitterCard {
                    card: Some("summary".to_string()),
                    title: Some("Title".to_string()),
                    description: Some("Description".to_string()),
                    image: None,
                },
                ..Default::default()
            }),
        );
        assert_eq!(r.status, AuditStatus::Complete);
    }

    #[test]
    fn test_twitter_incomplete_without_card() {
        let r = evaluate_check(
            AuditCheck::TwitterCardTags,
            &fields(RawFields {
                twitter_card: RawTwitterCard {
                    title: Some("Title".to_string()),
                    description: Some("Description".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            }),
        );
        assert_eq!(r.status, AuditStatus::Incomplete);
        assert_eq!(r.suggestion, INCOMPLETE_TWITTER);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let extracted = with_title(12);
        assert_eq!(evaluate(&extracted), evaluate(&extracted));
    }
}
