// Shared test helpers: page fixtures and mock page servers.

use httptest::{matchers::*, responders::*, Expectation, Server};

/// 45-character title.
#[allow(dead_code)]
pub const GOOD_TITLE: &str = "The Practical Guide to Auditing Page Metadata";

/// 100-character meta description.
#[allow(dead_code)]
pub const GOOD_DESCRIPTION: &str =
    "Learn how titles, descriptions, canonical links and social tags shape the way your pages are shared.";

/// A page that passes every check.
#[allow(dead_code)]
pub fn complete_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{GOOD_TITLE}</title>
  <meta name="description" content="{GOOD_DESCRIPTION}">
  <link rel="canonical" href="https://example.com/guide">
  <meta name="robots" content="index,follow">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta property="og:title" content="Auditing Page Metadata">
  <meta property="og:description" content="A practical guide.">
  <meta property="og:image" content="https://example.com/og.png">
  <meta property="og:url" content="https://example.com/guide">
  <meta property="og:site_name" content="Example">
  <meta name="twitter:card" content="summary_large_image">
  <meta name="twitter:title" content="Auditing Page Metadata">
  <meta name="twitter:description" content="A practical guide.">
  <meta name="twitter:image" content="https://example.com/twitter.png">
  <meta name="twitter:creator" content="@example">
</head>
<body>
  <h1>Auditing Page Metadata</h1>
</body>
</html>"#
    )
}

/// Starts a mock server answering `GET path` with `body` as `text/html`.
#[allow(dead_code)]
pub fn html_server(path: &'static str, body: String) -> Server {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", path)).respond_with(
            status_code(200)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .body(body),
        ),
    );
    server
}

/// `http://<addr><path>` for a mock server.
#[allow(dead_code)]
pub fn url_for(server: &Server, path: &str) -> String {
    format!("http://{}{}", server.addr(), path)
}
