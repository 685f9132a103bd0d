#![allow(dead_code)]

use std::sync::Arc;

use assist_api::config::ServerConfig;
use assist_api::router::build_app_router;
use assist_api::state::AppState;
use assist_core::clock::FixedClock;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// The date every test app believes is today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the application router with the production middleware stack and a
/// clock pinned to [`today`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_on(pool, today())
}

pub fn build_test_app_on(pool: PgPool, today: NaiveDate) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        clock: Arc::new(FixedClock(today)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register a beneficiary and return its id.
pub async fn create_beneficiary(pool: &PgPool, name: &str, cpf: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/beneficiaries",
        serde_json::json!({ "full_name": name, "cpf": cpf }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Save a plan with the given periodicity.
pub async fn set_periodicity(pool: &PgPool, beneficiary_id: i64, periodicity: &str) {
    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/beneficiaries/{beneficiary_id}/plan"),
        serde_json::json!({ "basket_type": "basica", "periodicity": periodicity }),
    )
    .await;
    assert_eq!(response.status(), 200);
}

/// Insert a withdrawal directly, bypassing the eligibility gate.
pub async fn seed_withdrawal(pool: &PgPool, beneficiary_id: i64, on: NaiveDate) {
    sqlx::query(
        "INSERT INTO basket_withdrawals (beneficiary_id, withdrawal_date) VALUES ($1, $2)",
    )
    .bind(beneficiary_id)
    .bind(on)
    .execute(pool)
    .await
    .unwrap();
}
