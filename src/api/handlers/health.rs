//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Liveness check.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Does not touch the database; a 200 only means the process is serving.
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}
