//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its click counter.
///
/// `code` is the primary key and never changes after creation. The only
/// mutation a stored link sees is the click increment, which bumps
/// `click_count` and sets `last_clicked_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        original_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        last_clicked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            original_url,
            click_count,
            created_at,
            last_clicked_at,
        }
    }

    /// Returns true if the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }
}

/// Input data for creating a new link.
///
/// The counter starts at zero and `created_at` is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

/// Aggregate figures over every stored link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkStats {
    pub total_links: i64,
    pub total_clicks: i64,
    pub avg_clicks_per_link: f64,
    pub max_clicks: i64,
}
