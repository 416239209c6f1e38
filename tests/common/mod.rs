#![allow(dead_code)]

use chrono::{DateTime, Utc};
use linkcut::state::AppState;
use sqlx::SqlitePool;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, "http://localhost:3000".to_string())
}

pub async fn create_test_url(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    create_test_url_at(pool, code, url, Utc::now()).await
}

pub async fn create_test_url_at(
    pool: &SqlitePool,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO urls (original_url, short_code, created_at, click_count) \
         VALUES (?, ?, ?, 0) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_access(
    pool: &SqlitePool,
    url_id: i64,
    ip: &str,
    accessed_at: DateTime<Utc>,
) {
    sqlx::query(
        "INSERT INTO access_logs (url_id, ip_address, user_agent, accessed_at) \
         VALUES (?, ?, 'TestBot/1.0', ?)",
    )
    .bind(url_id)
    .bind(ip)
    .bind(accessed_at)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT click_count FROM urls WHERE short_code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn url_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn access_count(pool: &SqlitePool, url_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM access_logs WHERE url_id = ?")
        .bind(url_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
