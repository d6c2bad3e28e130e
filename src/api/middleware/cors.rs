//! Cross-origin resource sharing policy.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::api::handlers::X_TOTAL_COUNT;

/// Creates the CORS layer for a single trusted frontend origin.
///
/// # Policy
///
/// - Only `allowed_origin` is accepted, with credentials
/// - Methods: `GET`, `POST`, `DELETE`, `OPTIONS`
/// - Request headers: `Content-Type`, `Accept`, `Authorization`
/// - `X-Total-Count` is exposed so the frontend can paginate
pub fn layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([X_TOTAL_COUNT])
}
