//! Configuration constants.
//!
//! This module defines the thresholds used by the audit rules, the fallback
//! values applied during extraction, and the limits used by the fetch layer.

use std::ops::RangeInclusive;

// Audit thresholds
/// Acceptable title length in characters (inclusive on both ends)
pub const TITLE_LENGTH_RANGE: RangeInclusive<usize> = 30..=60;
/// Acceptable meta description length in characters (inclusive on both ends)
pub const META_DESCRIPTION_LENGTH_RANGE: RangeInclusive<usize> = 50..=160;

/// Suggestion shown for every check that passes.
pub const LOOKS_GOOD: &str = "Looks good!";

/// Image used for `og:image` when the page does not declare one.
///
/// `twitter:image` falls back to the Open Graph image, so this placeholder also
/// ends up on the Twitter card when neither tag is present.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x315.png?text=No+Image";

// Network
/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum response body size in bytes (2MB)
/// Responses larger than this are rejected to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;
/// Maximum URL length accepted for analysis
pub const MAX_URL_LENGTH: usize = 2048;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

// Error message limits
/// Maximum error message length in characters shown to the user
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;
