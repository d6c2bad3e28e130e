#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::application::services::LinkService;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, original_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_clicked_link(pool: &PgPool, code: &str, url: &str, clicks: i64) {
    sqlx::query(
        "INSERT INTO links (code, original_url, click_count, last_clicked_at) VALUES ($1, $2, $3, NOW())",
    )
    .bind(code)
    .bind(url)
    .bind(clicks)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a link with an explicit creation time, `minutes_ago` in the past.
pub async fn create_aged_link(pool: &PgPool, code: &str, url: &str, minutes_ago: i32) {
    sqlx::query(
        "INSERT INTO links (code, original_url, created_at) VALUES ($1, $2, NOW() - make_interval(mins => $3))",
    )
    .bind(code)
    .bind(url)
    .bind(minutes_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<LinkService> {
    let link_repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    Arc::new(LinkService::new(link_repo, BASE_URL))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool), true)
}
