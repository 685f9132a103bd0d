//! Handlers for a beneficiary's household composition.

use assist_core::types::DbId;
use assist_db::models::household_member::ReplaceHousehold;
use assist_db::repositories::{BeneficiaryRepo, HouseholdRepo};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /beneficiaries/{id}/household
pub async fn get_household(
    State(state): State<AppState>,
    Path(beneficiary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BeneficiaryRepo::exists(&state.pool, beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", beneficiary_id));
    }

    let members = HouseholdRepo::list_for_beneficiary(&state.pool, beneficiary_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// PUT /beneficiaries/{id}/household
///
/// Replaces the whole household. An empty `members` list clears it.
pub async fn replace_household(
    State(state): State<AppState>,
    Path(beneficiary_id): Path<DbId>,
    Json(input): Json<ReplaceHousehold>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let mut tx = state.pool.begin().await?;
    if !BeneficiaryRepo::lock_for_update(&mut *tx, beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", beneficiary_id));
    }
    let members =
        HouseholdRepo::replace_for_beneficiary(&mut tx, beneficiary_id, &input.members).await?;
    tx.commit().await?;

    tracing::info!(
        beneficiary_id,
        member_count = members.len(),
        "Household replaced"
    );

    Ok(Json(DataResponse { data: members }))
}
