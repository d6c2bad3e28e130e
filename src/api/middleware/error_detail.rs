//! Server error detail rendering.
//!
//! [`crate::error::AppError`] attaches an [`ErrorDetail`] extension to every
//! response caused by an unexpected storage failure. Outside production this middleware re-renders the body with
//! an extra `stack` field carrying the error chain; in production the
//! extension is dropped and the body stays `{error, message}`.

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::ErrorDetail;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct DetailedErrorBody {
    error: &'static str,
    message: String,
    stack: String,
}

/// Middleware function for error detail exposure.
///
/// # Usage
///
/// ```rust,ignore
/// router.layer(middleware::from_fn_with_state(state, error_detail::layer))
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    let Some(detail) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };

    if !state.expose_error_details {
        return response;
    }

    let status = response.status();
    let body = DetailedErrorBody {
        error: detail.kind,
        message: detail.message,
        stack: detail.trace,
    };

    (status, Json(body)).into_response()
}
