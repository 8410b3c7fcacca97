//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
    Json,
    Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

pub mod ingest;
pub mod logs;
pub mod metrics;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/logs", get(logs::list_logs).post(ingest::ingest_log))
        .route("/logs/batch", post(ingest::ingest_batch))
        .route("/logs/:id", get(logs::get_log))
        .route("/metrics/overview", get(metrics::overview_metrics))
        .route("/metrics/categories", get(metrics::category_breakdown))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unauthenticated liveness probe.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "logwell",
        "environment": state.config.environment,
    }))
}
