//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness check
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - Link management REST API
//! - anything else       - 404 JSON fallback
//!
//! # Middleware
//!
//! Innermost first:
//!
//! - **Error detail** - Adds the error chain to unexpected 500 bodies outside production
//! - **CORS** - Single configured frontend origin, credentials allowed
//! - **Tracing** - Structured request/response logging
//!
//! Trailing slash normalization is applied around the whole router by
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{cors, error_detail, tracing};
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origin` - the only origin CORS accepts
pub fn app_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_detail::layer,
        ))
        .layer(cors::layer(allowed_origin))
        .layer(tracing::layer())
        .with_state(state)
}
