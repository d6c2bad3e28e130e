//! Handlers for link management endpoints (create, list, fetch, delete).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{HeaderName, StatusCode},
    response::IntoResponse,
};

use crate::api::dto::link::{CreateLinkRequest, DeleteLinkResponse, LinkResponse};
use crate::api::dto::pagination::ListParams;
use crate::error::AppError;
use crate::state::AppState;

/// Response header carrying the total number of stored links.
pub const X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/very/long/path",
///   "custom_code": "mycode1"   // optional, 6-8 alphanumeric characters
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, a field is not a string,
/// or validation fails.
/// Returns 409 Conflict if the custom code is already taken.
/// Returns 500 if no free code could be generated.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    let (original_url, custom_code) = payload.into_input()?;

    let link = state
        .link_service
        .create_link(original_url, custom_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.link_service)),
    ))
}

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?page=1&limit=100`
///
/// # Response
///
/// A JSON array of links. The total number of stored links is returned in
/// the `X-Total-Count` header.
///
/// A `page` or `limit` that is missing, unparsable or not positive falls back
/// to its default. A query string that cannot be read at all is treated as
/// empty.
pub async fn list_links_handler(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let (offset, limit) = params.offset_limit();

    let page = state.link_service.list_links(limit, offset).await?;

    let items: Vec<LinkResponse> = page
        .links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.link_service))
        .collect();

    Ok(([(X_TOTAL_COUNT, page.total.to_string())], Json(items)))
}

/// Fetches a single link.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed or not valid UTF-8.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(code) = path?;
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(LinkResponse::from_link(link, &state.link_service)))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// ```json
/// { "message": "Link deleted successfully", "deleted": { "code": "abc123", ... } }
/// ```
///
/// Subsequent redirects for this code return 404.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is malformed or not valid UTF-8.
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_link_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    let Path(code) = path?;
    let link = state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteLinkResponse::new(LinkResponse::from_link(
        link,
        &state.link_service,
    ))))
}
