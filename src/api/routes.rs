//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler, stats_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /links`          - List links (paginated, `X-Total-Count` header)
/// - `POST   /links`          - Create a short link
/// - `GET    /links/{code}`   - Fetch one link
/// - `DELETE /links/{code}`   - Permanently delete a link
/// - `GET    /stats`          - Totals over all links
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
        .route("/stats", get(stats_handler))
}
