//! HTTP-level integration tests for beneficiaries, plans and eligibility.

mod common;

use axum::http::StatusCode;
use common::{body_json, date, get, post_json, put_json, seed_withdrawal};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_beneficiary_returns_201(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/beneficiaries",
        json!({ "full_name": "Maria Silva", "cpf": "529.982.247-25", "city": "Recife" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["cpf"], "52998224725");
    assert_eq!(json["data"]["status"], "Ativo");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_cpf_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/beneficiaries",
        json!({ "full_name": "Maria", "cpf": "111.111.111-11" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_cpf_returns_409(pool: PgPool) {
    common::create_beneficiary(&pool, "Maria", "52998224725").await;
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/beneficiaries",
        json!({ "full_name": "Outra Maria", "cpf": "529.982.247-25" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_beneficiary_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/beneficiaries/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_can_deactivate(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Ana", "11144477735").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/beneficiaries/{id}"),
        json!({ "status": "Inativo" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "Inativo");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/beneficiaries?status=Inativo",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_status_filter_is_bad_request(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/beneficiaries?status=pending",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Distribution plan
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn plan_periodicity_is_canonicalized(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Bruno", "98765432100").await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/beneficiaries/{id}/plan"),
        json!({ "basket_type": "basica", "periodicity": "Mensal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["periodicity"], "mensal");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/plan"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["basket_type"], "basica");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_periodicity_is_rejected(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Carla", "39053344705").await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/plan"),
        json!({ "periodicity": "daily" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_plan_returns_404(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Davi", "15350946056").await;
    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/plan"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn plan_for_unknown_beneficiary_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/beneficiaries/999999/plan",
        json!({ "periodicity": "mensal" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn monthly_plan_blocks_until_next_month(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Eva", "24681357928").await;
    common::set_periodicity(&pool, id, "mensal").await;
    seed_withdrawal(&pool, id, date(2024, 3, 5)).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/eligibility"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["beneficiary_id"], id);
    assert_eq!(data["eligible"], false);
    assert_eq!(data["next_eligible_date"], "2024-04-05");
    assert_eq!(data["reason"], "Próxima retirada permitida em 05/04/2024");
    assert_eq!(data["last_withdrawal_date"], "2024-03-05");
    assert_eq!(data["periodicity"], "mensal");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn weekly_plan_is_eligible_on_the_seventh_day(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Fabio", "12345678909").await;
    common::set_periodicity(&pool, id, "semanal").await;
    seed_withdrawal(&pool, id, date(2024, 3, 8)).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/eligibility"),
    )
    .await;
    let data = &body_json(response).await["data"];
    assert_eq!(data["eligible"], true);
    assert!(data["next_eligible_date"].is_null());
    assert_eq!(data["reason"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn no_plan_is_eligible(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Gabi", "52998224725").await;
    seed_withdrawal(&pool, id, date(2024, 3, 14)).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/eligibility"),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["eligible"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn eligibility_for_unknown_beneficiary_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/beneficiaries/999999/eligibility",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selection_list_marks_blocked_beneficiaries(pool: PgPool) {
    let blocked = common::create_beneficiary(&pool, "Ana", "11144477735").await;
    let free = common::create_beneficiary(&pool, "Bruno", "98765432100").await;
    let inactive = common::create_beneficiary(&pool, "Carla", "39053344705").await;
    common::set_periodicity(&pool, blocked, "quinzenal").await;
    seed_withdrawal(&pool, blocked, date(2024, 3, 10)).await;
    put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/beneficiaries/{inactive}"),
        json!({ "status": "Inativo" }),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/v1/beneficiaries/eligible").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], blocked);
    assert_eq!(items[0]["eligible"], false);
    assert_eq!(items[0]["next_eligible_date"], "2024-04-10");
    assert_eq!(items[1]["id"], free);
    assert_eq!(items[1]["eligible"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn beneficiary_history_is_newest_first(pool: PgPool) {
    let id = common::create_beneficiary(&pool, "Hugo", "52998224725").await;
    seed_withdrawal(&pool, id, date(2024, 1, 10)).await;
    seed_withdrawal(&pool, id, date(2024, 2, 10)).await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/beneficiaries/{id}/withdrawals"),
    )
    .await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["withdrawal_date"], "2024-02-10");
}
