//! HTTP server for the Magallan portfolio job card.
//!
//! Serves the rendered page, a JSON mirror of the translation documents,
//! a health check and static assets, with structured logging (tracing)
//! and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(routes::page::show))
        .route("/api/profile", get(routes::profile::get))
        .route("/health", get(routes::health::check))
        .with_state(state)
        .nest_service("/static", static_files)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::HEAD])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
