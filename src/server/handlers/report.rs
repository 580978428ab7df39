//! JSON report handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::super::types::{AppState, AuditQuery, ErrorResponse};
use crate::fetch::analyze_url;
use crate::report::Report;

/// JSON report endpoint.
///
/// - `400` when `url` is missing or invalid
/// - `502` when the page cannot be fetched or is not markup
pub async fn report_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditQuery>,
) -> Result<Json<Report>, (StatusCode, Json<ErrorResponse>)> {
    let Some(url) = query.target() else {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: url".to_string(),
        ));
    };

    match analyze_url(&state.client, url).await {
        Ok(report) => Ok(Json(report)),
        Err(e) if e.is_invalid_input() => Err(error_response(StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err(error_response(StatusCode::BAD_GATEWAY, e.to_string())),
    }
}

fn error_response(status: StatusCode, error: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error }))
}
