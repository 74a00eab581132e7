//! API and startup error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::CatalogError;
use render::{RenderError, TemplateError};
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The page template could not be rendered.
    Render(RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Render(err) => {
                tracing::error!(error = %err, "page rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err)
    }
}

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Translation documents could not be loaded.
    #[error("Failed to load translations: {0}")]
    Catalog(#[from] CatalogError),

    /// The page template could not be loaded.
    #[error("Failed to load page template: {0}")]
    Template(#[from] TemplateError),

    /// The Prometheus recorder could not be installed.
    #[error("Failed to install metrics recorder: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// The listen address could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
