mod common;

use chrono::{Duration, Utc};
use linkcut::domain::entities::{NewUrlRecord, VisitMeta};
use linkcut::domain::repositories::UrlRepository;
use linkcut::error::AppError;
use linkcut::infrastructure::persistence::SqliteUrlRepository;
use sqlx::SqlitePool;

fn new_record(url: &str, code: &str) -> NewUrlRecord {
    NewUrlRecord {
        original_url: url.to_string(),
        short_code: code.to_string(),
    }
}

#[sqlx::test]
async fn test_create_assigns_identity_and_zero_clicks(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    let record = repo
        .create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.short_code, "abc123");
    assert_eq!(record.click_count, 0);
}

#[sqlx::test]
async fn test_create_duplicate_code_is_conflict(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_record("https://example.com/a", "same01"))
        .await
        .unwrap();

    let result = repo
        .create(new_record("https://example.com/b", "same01"))
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_create_duplicate_url_is_conflict(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_record("https://example.com", "first1"))
        .await
        .unwrap();

    let result = repo.create(new_record("https://example.com", "other1")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_code_exact_match_only(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_record("https://example.com", "AbC123"))
        .await
        .unwrap();

    assert!(repo.find_by_code("AbC123").await.unwrap().is_some());
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
    assert!(repo.find_by_code("AbC12").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_original_url(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool);

    repo.create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();

    let found = repo
        .find_by_original_url("https://example.com")
        .await
        .unwrap();
    assert_eq!(found.unwrap().short_code, "abc123");

    assert!(
        repo.find_by_original_url("https://example.org")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_list_all_newest_first(pool: SqlitePool) {
    let now = Utc::now();
    common::create_test_url_at(&pool, "old001", "https://example.com/1", now - Duration::hours(2))
        .await;
    common::create_test_url_at(&pool, "mid001", "https://example.com/2", now - Duration::hours(1))
        .await;
    common::create_test_url_at(&pool, "new001", "https://example.com/3", now).await;

    let repo = SqliteUrlRepository::new(pool);
    let records = repo.list_all().await.unwrap();

    let codes: Vec<&str> = records.iter().map(|r| r.short_code.as_str()).collect();
    assert_eq!(codes, vec!["new001", "mid001", "old001"]);
}

#[sqlx::test]
async fn test_record_visit_increments_and_logs(pool: SqlitePool) {
    let url_id = common::create_test_url(&pool, "visit1", "https://example.com").await;

    let repo = SqliteUrlRepository::new(pool.clone());

    let visit = VisitMeta {
        ip_address: Some("192.168.1.1".to_string()),
        user_agent: Some("TestBot/1.0".to_string()),
    };
    let record = repo.record_visit("visit1", visit).await.unwrap().unwrap();

    assert_eq!(record.click_count, 1);
    assert_eq!(common::access_count(&pool, url_id).await, 1);

    let record = repo
        .record_visit("visit1", VisitMeta::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.click_count, 2);
    assert_eq!(common::access_count(&pool, url_id).await, 2);
}

#[sqlx::test]
async fn test_record_visit_unknown_code_writes_nothing(pool: SqlitePool) {
    let repo = SqliteUrlRepository::new(pool.clone());

    let result = repo
        .record_visit("zzzzzz", VisitMeta::default())
        .await
        .unwrap();
    assert!(result.is_none());

    let logs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM access_logs")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(logs, 0);
}
