//! Application configuration and constants.
//!
//! This module provides:
//! - Audit thresholds and default values
//! - Network limits for the fetch layer
//! - Library configuration and logging option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
