use axum::routing::get;
use axum::Router;

use crate::handlers::{beneficiaries, distribution_plans, household, visits};
use crate::state::AppState;

/// Routes mounted at `/beneficiaries`.
///
/// ```text
/// GET    /                    -> list_beneficiaries
/// POST   /                    -> create_beneficiary
/// GET    /eligible            -> list_selectable
/// GET    /{id}                -> get_beneficiary
/// PUT    /{id}                -> update_beneficiary
/// GET    /{id}/plan           -> get_plan
/// PUT    /{id}/plan           -> upsert_plan
/// GET    /{id}/eligibility    -> get_eligibility
/// GET    /{id}/withdrawals    -> list_beneficiary_withdrawals
/// GET    /{id}/household      -> get_household
/// PUT    /{id}/household      -> replace_household
/// GET    /{id}/visits         -> list_beneficiary_visits
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(beneficiaries::list_beneficiaries).post(beneficiaries::create_beneficiary),
        )
        .route("/eligible", get(beneficiaries::list_selectable))
        .route(
            "/{id}",
            get(beneficiaries::get_beneficiary).put(beneficiaries::update_beneficiary),
        )
        .route(
            "/{id}/plan",
            get(distribution_plans::get_plan).put(distribution_plans::upsert_plan),
        )
        .route("/{id}/eligibility", get(beneficiaries::get_eligibility))
        .route(
            "/{id}/withdrawals",
            get(beneficiaries::list_beneficiary_withdrawals),
        )
        .route(
            "/{id}/household",
            get(household::get_household).put(household::replace_household),
        )
        .route("/{id}/visits", get(visits::list_beneficiary_visits))
}
