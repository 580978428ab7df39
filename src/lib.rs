//! seo_audit library: SEO and social-sharing metadata audits.
//!
//! The library fetches a page, extracts a fixed set of SEO fields (title, meta
//! description, canonical link, first heading, language, robots, viewport,
//! Open Graph and Twitter Card tags), scores each of them, and assembles a
//! [`Report`] that can be rendered as HTML, text or JSON.
//!
//! The extraction and audit engine is synchronous and pure; only fetching is
//! async.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::{analyze_url, init_client, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = init_client(&Config::default())?;
//! let report = analyze_url(&client, "example.com").await?;
//! for audit in &report.audits {
//!     println!("{}: {} - {}", audit.name, audit.status_text(), audit.suggestion);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Markup that is already in memory can be audited without a runtime:
//!
//! ```
//! let report = seo_audit::audit_markup("<title>Home</title>", "https://example.com/");
//! assert_eq!(report.audits.len(), 9);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod render;
pub mod report;
pub mod server;
mod utils;

// Re-export public API
pub use audit::{AuditCheck, AuditResult, AuditStatus};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{AnalysisError, FetchError};
pub use fetch::{analyze_url, fetch_markup, validate_and_normalize_url};
pub use initialization::{init_client, init_logger_with};
pub use models::{ExtractedFields, OpenGraph, SocialMetaMap, TwitterCard};
pub use report::{audit_markup, Report};
