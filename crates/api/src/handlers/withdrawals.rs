//! Handlers for recording and reporting basket withdrawals.

use std::collections::HashMap;

use assist_core::eligibility::EligibilityResult;
use assist_core::error::CoreError;
use assist_core::types::{Date, DbId};
use assist_db::models::withdrawal::{
    CreateWithdrawal, DateRangeParams, WithdrawalListParams, WithdrawalWithBeneficiary,
};
use assist_db::repositories::{BeneficiaryRepo, WithdrawalRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::eligibility;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// A withdrawal row with the beneficiary's current eligibility.
#[derive(Debug, Serialize)]
pub struct WithdrawalListItem {
    #[serde(flatten)]
    pub withdrawal: WithdrawalWithBeneficiary,
    pub eligibility: EligibilityResult,
}

/// Decide whether a withdrawal dated `withdrawal_date` may be recorded.
///
/// Future dates are rejected outright. Otherwise the beneficiary's status
/// as of `today` decides; a blocked beneficiary yields a conflict carrying
/// the block reason.
pub fn admit_withdrawal(
    status: &EligibilityResult,
    withdrawal_date: Date,
    today: Date,
) -> Result<(), AppError> {
    if withdrawal_date > today {
        return Err(AppError::BadRequest(format!(
            "withdrawal_date {withdrawal_date} is in the future"
        )));
    }
    if !status.eligible {
        return Err(AppError::Core(CoreError::Conflict(status.reason.clone())));
    }
    Ok(())
}

/// GET /withdrawals?beneficiary_id=&q=&limit=&offset=
pub async fn list_withdrawals(
    State(state): State<AppState>,
    Query(params): Query<WithdrawalListParams>,
) -> AppResult<impl IntoResponse> {
    let today = state.clock.today();
    let rows = WithdrawalRepo::list(&state.pool, &params).await?;

    let mut ids: Vec<DbId> = rows.iter().map(|w| w.beneficiary_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let statuses: HashMap<DbId, _> = eligibility::evaluate_many(&state.pool, &ids, today).await?;

    let data: Vec<WithdrawalListItem> = rows
        .into_iter()
        .map(|withdrawal| {
            let eligibility = statuses
                .get(&withdrawal.beneficiary_id)
                .map(|s| s.eligibility.clone())
                .unwrap_or_else(|| eligibility::assess(None, &[], today).eligibility);
            WithdrawalListItem {
                withdrawal,
                eligibility,
            }
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// POST /withdrawals
///
/// The eligibility check and the insert run in one transaction holding the
/// beneficiary's row lock, so concurrent requests for the same beneficiary
/// are admitted one at a time and each sees the withdrawals committed
/// before it.
pub async fn create_withdrawal(
    State(state): State<AppState>,
    Json(input): Json<CreateWithdrawal>,
) -> AppResult<impl IntoResponse> {
    let beneficiary_id = input.beneficiary_id;
    let today = state.clock.today();

    let mut tx = state.pool.begin().await?;
    if !BeneficiaryRepo::lock_for_update(&mut *tx, beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", beneficiary_id));
    }

    let status = eligibility::evaluate_one(&mut tx, beneficiary_id, today).await?;

    if let Err(err) = admit_withdrawal(&status.eligibility, input.withdrawal_date, today) {
        tracing::warn!(
            beneficiary_id,
            withdrawal_date = %input.withdrawal_date,
            next_eligible_date = ?status.eligibility.next_eligible_date,
            "Withdrawal refused"
        );
        return Err(err);
    }

    let withdrawal = WithdrawalRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;

    tracing::info!(
        withdrawal_id = withdrawal.id,
        beneficiary_id,
        withdrawal_date = %withdrawal.withdrawal_date,
        "Withdrawal recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: withdrawal })))
}

/// GET /withdrawals/{id}
pub async fn get_withdrawal(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let withdrawal = WithdrawalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Withdrawal", id))?;

    Ok(Json(DataResponse { data: withdrawal }))
}

/// GET /withdrawals/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = WithdrawalRepo::stats(&state.pool, state.clock.today()).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /withdrawals/range?from=&to=
///
/// Both ends inclusive, oldest first.
pub async fn list_in_range(
    State(state): State<AppState>,
    Query(range): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    if range.from > range.to {
        return Err(AppError::BadRequest(format!(
            "from ({}) must not be after to ({})",
            range.from, range.to
        )));
    }

    let rows = WithdrawalRepo::list_in_range(&state.pool, range.from, range.to).await?;
    Ok(Json(DataResponse { data: rows }))
}
