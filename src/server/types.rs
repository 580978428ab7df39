//! Server data structures.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<reqwest::Client>,
}

impl AppState {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

/// Query string accepted by `/` and `/api/report`.
#[derive(Debug, Default, Deserialize)]
pub struct AuditQuery {
    pub url: Option<String>,
}

impl AuditQuery {
    /// The submitted URL, trimmed; `None` when absent or blank.
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

/// JSON body for `/api/report` failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
