//! Audit result types.

use serde::Serialize;
use std::fmt;
use strum_macros::EnumIter as EnumIterMacro;

/// Outcome of a single check.
///
/// `Found`/`Missing` are used for single-element checks, `Complete`/`Incomplete`
/// for the Open Graph and Twitter Card groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AuditStatus {
    Found,
    Missing,
    Complete,
    Incomplete,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Found => "Found",
            AuditStatus::Missing => "Missing",
            AuditStatus::Complete => "Complete",
            AuditStatus::Incomplete => "Incomplete",
        }
    }

    /// Whether the check passed its presence condition.
    pub fn is_present(&self) -> bool {
        matches!(self, AuditStatus::Found | AuditStatus::Complete)
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The audited checks, declared in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
pub enum AuditCheck {
    TitleTag,
    MetaDescription,
    CanonicalTag,
    H1Tag,
    LanguageAttribute,
    RobotsMetaTag,
    ViewportMetaTag,
    OpenGraphTags,
    TwitterCardTags,
}

impl AuditCheck {
    /// Display name used in the audit table.
    pub fn name(&self) -> &'static str {
        match self {
            AuditCheck::TitleTag => "Title Tag",
            AuditCheck::MetaDescription => "Meta Description",
            AuditCheck::CanonicalTag => "Canonical Tag",
            AuditCheck::H1Tag => "H1 Tag",
            AuditCheck::LanguageAttribute => "Language Attribute",
            AuditCheck::RobotsMetaTag => "Robots Meta Tag",
            AuditCheck::ViewportMetaTag => "Viewport Meta Tag",
            AuditCheck::OpenGraphTags => "Open Graph Tags",
            AuditCheck::TwitterCardTags => "Twitter Card Tags",
        }
    }
}

impl fmt::Display for AuditCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    pub name: &'static str,
    pub status: AuditStatus,
    /// Value shown next to the status, e.g. the language code in `Found (en)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub suggestion: String,
}

impl AuditResult {
    /// Status as displayed: `Found (en)` when a detail is attached, else the bare status.
    pub fn status_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{} ({})", self.status, detail),
            None => self.status.to_string(),
        }
    }
}
