//! HTTP-level integration tests for home visits.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn record_and_fetch_visit(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Maria", "52998224725").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/visits",
        json!({
            "beneficiary_id": id,
            "visit_date": "2024-03-10",
            "visitor_name": "Joana",
            "received_by": "Maria",
            "report": "Casa organizada, despensa vazia."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let visit_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/visits/{visit_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = &body_json(response).await["data"];
    assert_eq!(data["beneficiary_name"], "Maria");
    assert_eq!(data["visitor_name"], "Joana");

    let missing = get(common::build_test_app(pool), "/api/v1/visits/999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn visitor_name_is_required(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Ana", "11144477735").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/visits",
        json!({ "beneficiary_id": id, "visit_date": "2024-03-10", "visitor_name": " " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn visit_for_unknown_beneficiary_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/visits",
        json!({ "beneficiary_id": 999999, "visit_date": "2024-03-10", "visitor_name": "Joana" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_beneficiary_and_name(pool: PgPool) {
    let ana = common::create_beneficiary(&pool, "Ana", "11144477735").await;
    let bruno = common::create_beneficiary(&pool, "Bruno", "98765432100").await;
    let visits = [(ana, "2024-01-05", "Joana"), (bruno, "2024-02-05", "Carlos")];
    for (beneficiary_id, day, visitor) in visits {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/visits",
            json!({ "beneficiary_id": beneficiary_id, "visit_date": day, "visitor_name": visitor }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(common::build_test_app(pool.clone()), "/api/v1/visits").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["visit_date"], "2024-02-05");

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/visits?beneficiary_id={ana}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let json =
        body_json(get(common::build_test_app(pool.clone()), "/api/v1/visits?q=carl").await).await;
    assert_eq!(json["data"][0]["beneficiary_id"], bruno);

    let json = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/beneficiaries/{bruno}/visits"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
