pub mod compare;
pub mod error;
pub mod health;
pub mod metrics;
pub mod search;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the full application router.
pub fn router(
    state: AppState,
    prometheus: Arc<PrometheusHandle>,
    max_upload_bytes: usize,
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/compare", post(compare::submit_comparison))
        .route("/api/v1/compare/{guid}", get(compare::get_comparison_status))
        .route("/api/v1/search", post(search::submit_search))
        .route("/api/v1/search/{guid}", get(search::get_search_status))
        .route(
            "/api/v1/search/{guid}/faces",
            get(search::get_recognized_faces),
        )
        .route(
            "/api/v1/search/{guid}/faces/{face_id}/matches",
            get(search::get_matched_faces),
        )
        .with_state(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(prometheus),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
}
