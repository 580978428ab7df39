//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use seo_audit::server::{build_router, AppState, ErrorResponse};

mod helpers;

use helpers::{complete_page, html_server, url_for};

fn router() -> axum::Router {
    build_router(AppState::new(Arc::new(reqwest::Client::new())))
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_healthz() {
    let (status, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_index_without_url_shows_form_only() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<form method="GET" action="/">"#));
    assert!(!body.contains("SEO Audit</h2>"));
    assert!(!body.contains("alert-danger"));
}

#[tokio::test]
async fn test_index_with_invalid_url_shows_error() {
    let (status, body) = get("/?url=ftp%3A%2F%2Fexample.com").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("alert-danger"));
    assert!(body.contains("Invalid URL"));
}

#[tokio::test]
async fn test_index_renders_report_for_mock_page() {
    let server = html_server("/page", complete_page());
    let uri = format!("/?url={}", url_for(&server, "/page"));

    let (status, body) = get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    let audit = body.find("SEO Audit</h2>").expect("audit section");
    let website = body.find("Website Preview</h2>").expect("website preview");
    let social = body.find("Social Media Previews</h2>").expect("social previews");
    let meta = body.find("Other OG/Twitter Meta Tags</h2>").expect("meta table");
    assert!(audit < website && website < social && social < meta);
}

#[tokio::test]
async fn test_report_requires_url() {
    let (status, body) = get("/api/report").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_str(&body).expect("error json");
    assert!(error.error.contains("url"));
}

#[tokio::test]
async fn test_report_rejects_invalid_url() {
    let (status, body) = get("/api/report?url=ftp%3A%2F%2Fexample.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_str(&body).expect("error json");
    assert!(error.error.starts_with("Error fetching URL: Invalid URL"));
}

#[tokio::test]
async fn test_report_upstream_failure_is_bad_gateway() {
    let server = httptest::Server::run();
    server.expect(
        httptest::Expectation::matching(httptest::matchers::request::method_path("GET", "/gone"))
            .respond_with(httptest::responders::status_code(410)),
    );
    let uri = format!("/api/report?url={}", url_for(&server, "/gone"));

    let (status, body) = get(&uri).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error: ErrorResponse = serde_json::from_str(&body).expect("error json");
    assert!(error.error.contains("410"));
}

#[tokio::test]
async fn test_report_returns_json_for_mock_page() {
    let server = html_server("/page", complete_page());
    let uri = format!("/api/report?url={}", url_for(&server, "/page"));

    let (status, body) = get(&uri).await;
    assert_eq!(status, StatusCode::OK);

    let report: serde_json::Value = serde_json::from_str(&body).expect("report json");
    let audits = report["audits"].as_array().expect("audits array");
    assert_eq!(audits.len(), 9);
    assert_eq!(audits[0]["name"], "Title Tag");
    assert_eq!(audits[0]["status"], "Found");
    assert_eq!(report["extra_social_meta"]["og:site_name"], "Example");
    assert_eq!(report["previews"].as_array().map(Vec::len), Some(4));
}
