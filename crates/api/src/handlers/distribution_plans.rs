//! Handlers for a beneficiary's distribution plan.

use assist_core::periodicity::canonicalize;
use assist_core::text::non_blank;
use assist_core::types::DbId;
use assist_db::models::distribution_plan::SaveDistributionPlan;
use assist_db::repositories::{BeneficiaryRepo, DistributionPlanRepo};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /beneficiaries/{id}/plan
pub async fn get_plan(
    State(state): State<AppState>,
    Path(beneficiary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let plan = DistributionPlanRepo::find_by_beneficiary(&state.pool, beneficiary_id)
        .await?
        .ok_or_else(|| AppError::not_found("DistributionPlan", beneficiary_id))?;

    Ok(Json(DataResponse { data: plan }))
}

/// PUT /beneficiaries/{id}/plan
///
/// Create or replace the plan. Periodicity is stored in its canonical form;
/// unknown values are rejected.
pub async fn upsert_plan(
    State(state): State<AppState>,
    Path(beneficiary_id): Path<DbId>,
    Json(input): Json<SaveDistributionPlan>,
) -> AppResult<impl IntoResponse> {
    if !BeneficiaryRepo::exists(&state.pool, beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", beneficiary_id));
    }

    let periodicity = match input.periodicity.as_deref() {
        Some(raw) => canonicalize(raw).map_err(AppError::BadRequest)?,
        None => None,
    };
    let input = SaveDistributionPlan {
        basket_type: non_blank(input.basket_type.as_deref()),
        periodicity: periodicity.map(str::to_string),
        start_date: input.start_date,
        assistance_analysis: non_blank(input.assistance_analysis.as_deref()),
    };

    let plan = DistributionPlanRepo::upsert(&state.pool, beneficiary_id, &input).await?;

    tracing::info!(
        beneficiary_id,
        plan_id = plan.id,
        periodicity = plan.periodicity.as_deref().unwrap_or("-"),
        "Distribution plan saved"
    );

    Ok(Json(DataResponse { data: plan }))
}
