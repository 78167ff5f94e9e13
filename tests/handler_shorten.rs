mod common;

use axum::{routing::post, Router};
use axum_test::TestServer;
use serde_json::json;
use sqlx::SqlitePool;
use urlmap::api::handlers::shorten_handler;

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();

    let code = short_url
        .strip_prefix(&format!("{}/", common::TEST_BASE_URL))
        .expect("short_url should start with the base URL");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    // The new mapping starts with an untouched counter.
    assert_eq!(common::fetch_clicks(&pool, code).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_url_field(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL is required");

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_empty_url(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL is required");

    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_stores_url_verbatim(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // No format, scheme, or case validation; the string is stored as-is.
    let submitted = "HTTPS://EXAMPLE.COM:443/Path#fragment";
    let response = server
        .post("/shorten")
        .json(&json!({ "url": submitted }))
        .await;

    response.assert_status_ok();

    let stored: String = sqlx::query_scalar("SELECT long_url FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, submitted);
}

#[sqlx::test]
async fn test_shorten_repeated_urls_get_distinct_codes(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    // Each submission creates its own mapping.
    assert_ne!(first["short_url"], second["short_url"]);
    assert_eq!(common::count_links(&pool).await, 2);
}
