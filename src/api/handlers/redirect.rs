//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (undecodable, malformed and unknown codes are all 404)
/// 2. Spawn the click increment as a detached task
/// 3. Return 302 Found with `Location: original_url`
///
/// # Click Tracking
///
/// The response never waits for the increment. A failed increment is logged
/// and otherwise dropped, so `click_count` may briefly lag behind redirects.
///
/// # Errors
///
/// Returns 404 Not Found if the short code is malformed or doesn't exist.
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(Path(code)) = path else {
        return Err(AppError::not_found("Link not found"));
    };
    let link = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(link.original_url.as_str()).map_err(|_| {
        AppError::server(format!("Stored URL for '{}' is not a valid header", link.code))
    })?;

    let service = state.link_service.clone();
    tokio::spawn(async move {
        if let Err(e) = service.record_click(&link.code).await {
            warn!(error = %e, code = %link.code, "Failed to record click");
        }
    });

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
