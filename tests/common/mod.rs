#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use urlmap::state::AppState;

pub const TEST_BASE_URL: &str = "http://s.test";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), TEST_BASE_URL.to_string())
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, long_url) VALUES (?1, ?2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
