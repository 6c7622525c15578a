//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::reference::ReferenceData;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub catalog_entries: usize,
    pub pattern_count: usize,
    pub version: &'static str,
}

/// `GET /api/health` — confirms the reference data is loaded and serving.
pub async fn check(State(reference): State<Arc<ReferenceData>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        catalog_entries: reference.catalog.len(),
        pattern_count: reference.patterns.len(),
        version: crate::config::APP_VERSION,
    })
}
