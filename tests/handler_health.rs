mod common;

use axum::{routing::get, Router};
use axum_test::TestServer;
use sqlx::SqlitePool;
use urlmap::api::handlers::health_handler;

#[sqlx::test]
async fn test_health_ok(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json["version"].is_string());
}
