//! HTTP request building.

/// Browser-like request headers.
///
/// Many sites serve reduced markup (or a bot challenge) to clients that do not
/// look like a browser, which would skew the audit.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(
                reqwest::header::HeaderName::from_static("upgrade-insecure-requests"),
                "1",
            )
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
