//! SEO audit rules.
//!
//! Turns [`ExtractedFields`](crate::models::ExtractedFields) into exactly nine
//! [`AuditResult`] entries, always in the order of [`AuditCheck`]:
//! Title Tag, Meta Description, Canonical Tag, H1 Tag, Language Attribute,
//! Robots Meta Tag, Viewport Meta Tag, Open Graph Tags, Twitter Card Tags.

mod rules;
mod types;

pub use rules::{evaluate, evaluate_check};
pub use types::{AuditCheck, AuditResult, AuditStatus};
