//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, fetching and analysis
//! - Categorization of `reqwest` errors into fetch failures
//!
//! A missing SEO field is never an error: absence is reported through the
//! audit statuses. Errors only describe why a report could not be produced.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{AnalysisError, FetchError, InitializationError};
