//! Health check endpoint

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::context::ScenariosContext;

/// Health check endpoint
///
/// Reports liveness plus the current transaction cache footprint, the one
/// piece of scenario state worth seeing without a profiler attached.
pub async fn health_check(State(ctx): State<ScenariosContext>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "cached_records": ctx.invoker.cache().len(),
    }))
}
