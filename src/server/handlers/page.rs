//! HTML page handler.

use axum::extract::{Query, State};
use axum::response::Html;

use super::super::types::{AppState, AuditQuery};
use crate::fetch::analyze_url;
use crate::render::render_page;

/// Form page; runs and renders an audit when `?url=` is present.
///
/// Failures are rendered as an alert on a `200` page, like any other outcome.
pub async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Html<String> {
    let target = query.target();
    let outcome = match target {
        Some(url) => Some(analyze_url(&state.client, url).await),
        None => None,
    };
    Html(render_page(target, outcome.as_ref()))
}

pub async fn health_handler() -> &'static str {
    "ok"
}
