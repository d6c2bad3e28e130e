//! Handler for aggregate link statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns totals over every stored link.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "total_links": 42,
///   "total_clicks": 1337,
///   "avg_clicks_per_link": 31.83,
///   "max_clicks": 500
/// }
/// ```
///
/// An empty store reports zeros.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats().await?;

    Ok(Json(stats.into()))
}
