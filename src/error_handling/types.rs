//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Reasons a document could not be fetched.
///
/// Display strings are user-facing: they are shown verbatim in the error alert
/// of the rendered page and in the JSON error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The URL is empty, too long, unparsable, or not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete before the client timeout.
    #[error("Request timed out")]
    Timeout,

    /// DNS resolution or the TCP/TLS connection failed.
    #[error("Could not connect to host: {0}")]
    Connect(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// Redirect loop or too many hops.
    #[error("Too many redirects: {0}")]
    Redirect(String),

    /// The response body exceeds the configured limit.
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// Limit in bytes
        limit: usize,
    },

    /// The body could not be read or decoded.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Other(String),
}

/// Failure of a whole analysis request.
///
/// Any failure upstream of field extraction aborts the analysis; no partial
/// report is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The document could not be retrieved.
    #[error("Error fetching URL: {0}")]
    Fetch(#[from] FetchError),

    /// The response cannot be treated as markup (e.g. an image or a PDF).
    #[error("Error parsing document: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Whether the failure originated before any bytes were requested.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalysisError::Fetch(FetchError::InvalidUrl(_)))
    }
}
