mod common;

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewLink;
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::PgLinkRepository;

fn new_link(code: &str, url: &str) -> NewLink {
    NewLink {
        code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(new_link("test123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.code, "test123");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.click_count, 0);
    assert!(link.last_clicked_at.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_code_is_conflict(pool: PgPool) {
    common::create_test_link(&pool, "dup1234", "https://a.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("dup1234", "https://b.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[sqlx::test]
async fn test_create_malformed_code_is_rejected_by_schema(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("ab-12", "https://example.com")).await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid code format"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_create_non_http_url_is_rejected_by_schema(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.create(new_link("abc123", "ftp://example.com")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    common::create_test_link(&pool, "abc123", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("abc123").await.unwrap();

    assert_eq!(link.unwrap().original_url, "https://example.com");
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_code_exists(pool: PgPool) {
    common::create_test_link(&pool, "exists1", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.code_exists("exists1").await.unwrap());
    assert!(!repo.code_exists("missing").await.unwrap());
}

#[sqlx::test]
async fn test_codes_are_case_sensitive(pool: PgPool) {
    common::create_test_link(&pool, "AbCdEf", "https://upper.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
    assert!(repo.find_by_code("AbCdEf").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_list_orders_newest_first_and_paginates(pool: PgPool) {
    common::create_aged_link(&pool, "old0001", "https://old.com", 30).await;
    common::create_aged_link(&pool, "mid0001", "https://mid.com", 20).await;
    common::create_aged_link(&pool, "new0001", "https://new.com", 10).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo.list(2, 0).await.unwrap();
    let codes: Vec<&str> = first.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["new0001", "mid0001"]);

    let second = repo.list(2, 2).await.unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].code, "old0001");

    assert!(repo.list(2, 10).await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    assert_eq!(repo.count().await.unwrap(), 0);

    common::create_test_link(&pool, "cnt0001", "https://a.com").await;
    common::create_test_link(&pool, "cnt0002", "https://b.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_delete_returns_removed_link(pool: PgPool) {
    common::create_test_link(&pool, "del0001", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let deleted = repo.delete("del0001").await.unwrap();
    assert_eq!(deleted.unwrap().code, "del0001");

    assert!(repo.find_by_code("del0001").await.unwrap().is_none());
    assert!(repo.delete("del0001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_increment_click_count(pool: PgPool) {
    common::create_test_link(&pool, "clk0001", "https://example.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo.increment_click_count("clk0001").await.unwrap().unwrap();
    assert_eq!(first.click_count, 1);
    assert!(first.last_clicked_at.is_some());

    let second = repo.increment_click_count("clk0001").await.unwrap().unwrap();
    assert_eq!(second.click_count, 2);
    assert_eq!(second.created_at, first.created_at);
}

#[sqlx::test]
async fn test_increment_missing_link_returns_none(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.increment_click_count("gone123").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_concurrent_increments_are_not_lost(pool: PgPool) {
    common::create_test_link(&pool, "race001", "https://example.com").await;
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_click_count("race001").await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(common::click_count(&pool, "race001").await, 20);
}

#[sqlx::test]
async fn test_stats_empty(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_links, 0);
    assert_eq!(stats.total_clicks, 0);
    assert_eq!(stats.avg_clicks_per_link, 0.0);
    assert_eq!(stats.max_clicks, 0);
}

#[sqlx::test]
async fn test_stats_totals(pool: PgPool) {
    common::create_clicked_link(&pool, "sta0001", "https://a.com", 1).await;
    common::create_clicked_link(&pool, "sta0002", "https://b.com", 5).await;
    common::create_test_link(&pool, "sta0003", "https://c.com").await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_links, 3);
    assert_eq!(stats.total_clicks, 6);
    assert!((stats.avg_clicks_per_link - 2.0).abs() < f64::EPSILON);
    assert_eq!(stats.max_clicks, 5);
}
