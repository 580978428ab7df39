//! Document fetching and the analysis entry point.
//!
//! This module is the I/O boundary around the audit engine:
//! - Validates the user-supplied URL
//! - Fetches the page with browser-like headers
//! - Rejects non-2xx responses, oversized bodies and non-markup content
//! - Hands the markup to [`audit_markup`] and returns the [`Report`]
//!
//! Any failure here aborts the analysis; no partial report is produced.

mod request;
mod validation;

use log::{debug, info, warn};

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::{AnalysisError, FetchError};
use crate::report::{audit_markup, Report};
use request::RequestHeaders;

pub use validation::validate_and_normalize_url;

/// Fetches `url` and returns its body as text.
///
/// # Errors
///
/// - `FetchError` for transport failures, non-2xx statuses and bodies larger
///   than `MAX_RESPONSE_BODY_SIZE`
/// - `AnalysisError::Parse` when the content type is not markup
pub async fn fetch_markup(client: &reqwest::Client, url: &str) -> Result<String, AnalysisError> {
    let response = RequestHeaders::apply_to_request_builder(client.get(url))
        .send()
        .await
        .map_err(FetchError::from)?;

    let status = response.status();
    debug!("Response status for {url}: {status}");
    let response = response.error_for_status().map_err(FetchError::from)?;

    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE as u64 {
            return Err(FetchError::BodyTooLarge {
                limit: MAX_RESPONSE_BODY_SIZE,
            }
            .into());
        }
    }

    // A missing Content-Type header is accepted (some servers don't send it)
    if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        let ct = ct.to_str().unwrap_or("").to_lowercase();
        if !is_markup_content_type(&ct) {
            info!("Refusing to audit {url}: non-markup content-type {ct}");
            return Err(AnalysisError::Parse(format!(
                "Unsupported content type: {ct}"
            )));
        }
    } else {
        debug!("No Content-Type header for {url}, continuing anyway");
    }

    // reqwest decodes the charset and decompresses gzip/deflate/br
    let body = response.text().await.map_err(FetchError::from)?;
    if body.len() > MAX_RESPONSE_BODY_SIZE {
        debug!("Rejecting large body: {} bytes", body.len());
        return Err(FetchError::BodyTooLarge {
            limit: MAX_RESPONSE_BODY_SIZE,
        }
        .into());
    }

    debug!("Body length for {url}: {} bytes", body.len());
    Ok(body)
}

/// Fetches a page and audits it.
///
/// # Arguments
///
/// * `client` - Shared HTTP client (see `initialization::init_client`)
/// * `url` - URL as typed by the user; normalized before fetching
///
/// # Errors
///
/// Returns `AnalysisError` if the URL is invalid or the page cannot be fetched.
pub async fn analyze_url(client: &reqwest::Client, url: &str) -> Result<Report, AnalysisError> {
    let normalized = validate_and_normalize_url(url)
        .ok_or_else(|| FetchError::InvalidUrl(url.trim().to_string()))?;

    info!("Analyzing {normalized}");
    let markup = match fetch_markup(client, &normalized).await {
        Ok(markup) => markup,
        Err(e) => {
            warn!("Failed to fetch {normalized}: {e}");
            return Err(e);
        }
    };

    let report = audit_off_runtime(markup, normalized.clone()).await?;
    info!(
        "Audited {normalized}: {}/{} checks passing, {} extra social tags",
        report.passing_checks(),
        report.audits.len(),
        report.extra_social_meta.len()
    );
    Ok(report)
}

/// Runs [`audit_markup`] on the blocking pool.
///
/// Parsing a large document is CPU-bound and must not stall the async workers
/// serving other requests.
async fn audit_off_runtime(markup: String, source_url: String) -> Result<Report, AnalysisError> {
    tokio::task::spawn_blocking(move || audit_markup(&markup, &source_url))
        .await
        .map_err(|e| {
            warn!("Audit task did not complete: {e}");
            AnalysisError::Parse(format!("Audit task failed: {e}"))
        })
}

fn is_markup_content_type(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || content_type.contains("html")
        || content_type.contains("xml")
}
