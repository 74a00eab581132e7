//! Health check endpoint.

use axum::Json;
use serde::Serialize;

/// Service name reported by the health check.
pub const SERVICE_NAME: &str = "magallan-portfolio";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health — returns a fixed status; independent of loaded translations.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
