//! Report assembly.
//!
//! A [`Report`] is the complete, immutable result of analyzing one page: the
//! extracted fields, the nine audit results, the extra social tags and the
//! preview cards. It is built once per request and never stored.

mod preview;

use serde::Serialize;

use crate::audit::{evaluate, AuditResult};
use crate::models::{ExtractedFields, SocialMetaMap};
use crate::parse::{extract_fields, PageDocument};

pub use preview::{build_previews, Platform, PreviewCard};

/// Everything the presentation layer needs to render an audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source_url: String,
    pub fields: ExtractedFields,
    pub audits: Vec<AuditResult>,
    pub extra_social_meta: SocialMetaMap,
    pub previews: Vec<PreviewCard>,
}

impl Report {
    /// Combines extracted fields with their audit results.
    ///
    /// Pure: runs the evaluator and derives the preview cards, nothing else.
    pub fn assemble(source_url: &str, fields: ExtractedFields) -> Self {
        let audits = evaluate(&fields);
        let previews = build_previews(&fields);
        let extra_social_meta = fields.extra_social_meta.clone();
        Self {
            source_url: source_url.to_string(),
            fields,
            audits,
            extra_social_meta,
            previews,
        }
    }

    /// Number of checks in a passing state (`Found`/`Complete` with no remaining suggestion).
    pub fn passing_checks(&self) -> usize {
        self.audits
            .iter()
            .filter(|a| a.status.is_present() && a.suggestion == crate::config::LOOKS_GOOD)
            .count()
    }
}

/// Runs extraction and evaluation over raw markup.
///
/// Parsing is best-effort and never fails, so neither does this function. The
/// parsed tree is dropped before returning; only the owned `Report` escapes.
///
/// # Arguments
///
/// * `markup` - The HTML document
/// * `source_url` - The URL the markup was fetched from (fallback for `og:url`)
pub fn audit_markup(markup: &str, source_url: &str) -> Report {
    let document = PageDocument::parse(markup);
    let raw = extract_fields(&document);
    let fields = ExtractedFields::with_defaults(raw, source_url);
    Report::assemble(source_url, fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditStatus;

    #[test]
    fn test_audit_markup_minimal_document() {
        let report = audit_markup("<html><head><title>Home</title></head></html>", "https://example.com/");
        assert_eq!(report.source_url, "https://example.com/");
        assert_eq!(report.audits.len(), 9);
        assert_eq!(report.audits[0].status, AuditStatus::Found);
        assert_eq!(report.audits[1].status, AuditStatus::Missing);
        assert_eq!(report.previews.len(), 4);
        assert_eq!(report.passing_checks(), 0);
    }

    #[test]
    fn test_report_carries_extra_social_meta() {
        let report = audit_markup(
            r#"<html><head><meta property="og:site_name" content="Example"></head></html>"#,
            "https://example.com/",
        );
        assert_eq!(report.extra_social_meta.get("og:site_name"), Some("Example"));
        assert_eq!(report.extra_social_meta, report.fields.extra_social_meta);
    }

    #[test]
    fn test_report_is_idempotent() {
        let markup = r#"<html lang="en"><head><title>Same page</title>
            <meta property="og:locale" content="en_US"></head></html>"#;
        assert_eq!(
            audit_markup(markup, "https://example.com/"),
            audit_markup(markup, "https://example.com/")
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = audit_markup(
            r#"<html lang="en"><head><title>Home</title></head></html>"#,
            "https://example.com/",
        );
        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["source_url"], "https://example.com/");
        assert_eq!(json["audits"].as_array().map(|a| a.len()), Some(9));
        assert_eq!(json["audits"][4]["detail"], "en");
        assert_eq!(json["audits"][0]["status"], "Found");
        assert_eq!(json["previews"][0]["platform"], "Website");
    }
}
