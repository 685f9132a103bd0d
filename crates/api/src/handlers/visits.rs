//! Handlers for home visits.

use assist_core::types::DbId;
use assist_db::models::home_visit::{CreateHomeVisit, VisitListParams};
use assist_db::repositories::{BeneficiaryRepo, HomeVisitRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /visits?beneficiary_id=&q=&limit=&offset=
pub async fn list_visits(
    State(state): State<AppState>,
    Query(params): Query<VisitListParams>,
) -> AppResult<impl IntoResponse> {
    let visits = HomeVisitRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: visits }))
}

/// POST /visits
pub async fn create_visit(
    State(state): State<AppState>,
    Json(input): Json<CreateHomeVisit>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if !BeneficiaryRepo::exists(&state.pool, input.beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", input.beneficiary_id));
    }

    let visit = HomeVisitRepo::create(&state.pool, &input).await?;

    tracing::info!(
        visit_id = visit.id,
        beneficiary_id = visit.beneficiary_id,
        visit_date = %visit.visit_date,
        "Home visit recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: visit })))
}

/// GET /visits/{id}
pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let visit = HomeVisitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("HomeVisit", id))?;

    Ok(Json(DataResponse { data: visit }))
}

/// GET /beneficiaries/{id}/visits
pub async fn list_beneficiary_visits(
    State(state): State<AppState>,
    Path(beneficiary_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BeneficiaryRepo::exists(&state.pool, beneficiary_id).await? {
        return Err(AppError::not_found("Beneficiary", beneficiary_id));
    }

    let visits = HomeVisitRepo::list_for_beneficiary(&state.pool, beneficiary_id).await?;
    Ok(Json(DataResponse { data: visits }))
}
