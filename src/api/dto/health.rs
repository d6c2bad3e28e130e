//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self {
            ok: true,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
