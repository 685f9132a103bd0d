//! Handlers for beneficiary registration, lookup and eligibility.

use assist_core::beneficiary::validate_status;
use assist_core::eligibility::EligibilityResult;
use assist_core::types::DbId;
use assist_db::models::beneficiary::{BeneficiaryListParams, CreateBeneficiary, UpdateBeneficiary};
use assist_db::repositories::{BeneficiaryRepo, WithdrawalRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use crate::eligibility::{self, PlanEligibility};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// An active beneficiary in the withdrawal selection list.
#[derive(Debug, Serialize)]
pub struct SelectableBeneficiary {
    pub id: DbId,
    pub full_name: String,
    #[serde(flatten)]
    pub eligibility: EligibilityResult,
}

/// Eligibility of one beneficiary.
#[derive(Debug, Serialize)]
pub struct BeneficiaryEligibility {
    pub beneficiary_id: DbId,
    #[serde(flatten)]
    pub status: PlanEligibility,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /beneficiaries?status=&q=&limit=&offset=
pub async fn list_beneficiaries(
    State(state): State<AppState>,
    Query(params): Query<BeneficiaryListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        validate_status(status).map_err(AppError::BadRequest)?;
    }

    let beneficiaries = BeneficiaryRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse {
        data: beneficiaries,
    }))
}

/// POST /beneficiaries
pub async fn create_beneficiary(
    State(state): State<AppState>,
    Json(input): Json<CreateBeneficiary>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let beneficiary = BeneficiaryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        beneficiary_id = beneficiary.id,
        status = %beneficiary.status,
        "Beneficiary registered"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: beneficiary })))
}

/// GET /beneficiaries/{id}
pub async fn get_beneficiary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let beneficiary = BeneficiaryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Beneficiary", id))?;

    Ok(Json(DataResponse { data: beneficiary }))
}

/// PUT /beneficiaries/{id}
pub async fn update_beneficiary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBeneficiary>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let beneficiary = BeneficiaryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Beneficiary", id))?;

    tracing::info!(beneficiary_id = id, "Beneficiary updated");

    Ok(Json(DataResponse { data: beneficiary }))
}

/// GET /beneficiaries/eligible
///
/// Active beneficiaries ordered by name, each marked with whether a basket
/// may be handed out today. Blocked ones are still listed so the client can
/// show them disabled.
pub async fn list_selectable(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let today = state.clock.today();
    let beneficiaries = BeneficiaryRepo::list_active(&state.pool).await?;
    let ids: Vec<DbId> = beneficiaries.iter().map(|b| b.id).collect();
    let mut statuses = eligibility::evaluate_many(&state.pool, &ids, today).await?;

    let data: Vec<SelectableBeneficiary> = beneficiaries
        .into_iter()
        .map(|b| SelectableBeneficiary {
            eligibility: statuses
                .remove(&b.id)
                .map(|s| s.eligibility)
                .unwrap_or_else(|| eligibility::assess(None, &[], today).eligibility),
            id: b.id,
            full_name: b.full_name,
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /beneficiaries/{id}/eligibility
pub async fn get_eligibility(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BeneficiaryRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Beneficiary", id));
    }

    let mut conn = state.pool.acquire().await?;
    let status = eligibility::evaluate_one(&mut conn, id, state.clock.today()).await?;

    Ok(Json(DataResponse {
        data: BeneficiaryEligibility {
            beneficiary_id: id,
            status,
        },
    }))
}

/// GET /beneficiaries/{id}/withdrawals
///
/// Full withdrawal history, newest first.
pub async fn list_beneficiary_withdrawals(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BeneficiaryRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Beneficiary", id));
    }

    let history = WithdrawalRepo::list_for_beneficiary(&state.pool, id).await?;
    Ok(Json(DataResponse { data: history }))
}
