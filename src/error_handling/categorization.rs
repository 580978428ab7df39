//! Error categorization.
//!
//! This module maps `reqwest` errors onto the user-facing `FetchError` variants.

use super::types::FetchError;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// HTTP status errors are checked first so that `error_for_status()` failures
/// report the status code; transport errors are then classified by kind.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `FetchError`, carrying a sanitized message where relevant.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        if status.is_client_error() || status.is_server_error() {
            return FetchError::Status(status.as_u16());
        }
    }

    let message = sanitize_and_truncate_error_message(&error.to_string());
    if error.is_builder() {
        FetchError::InvalidUrl(message)
    } else if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::Redirect(message)
    } else if error.is_connect() {
        FetchError::Connect(message)
    } else if error.is_body() || error.is_decode() {
        FetchError::Body(message)
    } else {
        FetchError::Other(message)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        categorize_reqwest_error(&error)
    }
}
