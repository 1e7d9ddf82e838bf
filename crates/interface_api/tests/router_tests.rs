//! Router-level tests
//!
//! These run against the real router with a lazy pool: routes that never
//! touch the database (liveness, auth rejection) are exercised end to end.

use axum::http::{header::AUTHORIZATION, HeaderValue};
use axum_test::TestServer;
use interface_api::{config::ApiConfig, create_router};
use sqlx::postgres::PgPoolOptions;

fn test_server() -> TestServer {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/retail_test")
        .expect("lazy pool");
    TestServer::new(create_router(pool, ApiConfig::default())).expect("test server")
}

#[tokio::test]
async fn test_health_is_public() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_ledger_routes_require_a_token() {
    let server = test_server();

    for path in [
        "/api/v1/products",
        "/api/v1/products/low-stock",
        "/api/v1/finance/daily",
    ] {
        let response = server.get(path).await;
        response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_garbage_bearer_token_is_rejected() {
    let server = test_server();

    let response = server
        .get("/api/v1/products")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer garbage"))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_checkout_requires_a_token() {
    let server = test_server();

    let response = server
        .post("/api/v1/checkout")
        .json(&serde_json::json!({
            "product_id": "00000000-0000-0000-0000-000000000001",
            "quantity": 1,
            "kind": "varejo",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::UNAUTHORIZED);
}
