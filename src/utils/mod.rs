//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - String sanitization utilities

pub mod sanitize;
mod selector;

pub use selector::parse_selector_unsafe;
