//! DTOs for aggregate link statistics.

use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Totals over every stored link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_links: i64,
    pub total_clicks: i64,
    pub avg_clicks_per_link: f64,
    pub max_clicks: i64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_links: stats.total_links,
            total_clicks: stats.total_clicks,
            avg_clicks_per_link: stats.avg_clicks_per_link,
            max_clicks: stats.max_clicks,
        }
    }
}
