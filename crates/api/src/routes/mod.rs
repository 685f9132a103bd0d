pub mod beneficiaries;
pub mod health;
pub mod visits;
pub mod withdrawals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /beneficiaries                                   list, register
/// /beneficiaries/eligible                          active beneficiaries + eligibility
/// /beneficiaries/{id}                              get, update
/// /beneficiaries/{id}/plan                         get, upsert
/// /beneficiaries/{id}/eligibility                  current eligibility
/// /beneficiaries/{id}/withdrawals                  withdrawal history
/// /beneficiaries/{id}/household                    get, replace
/// /beneficiaries/{id}/visits                       visit history
///
/// /withdrawals                                     list, record
/// /withdrawals/stats                               dashboard counters
/// /withdrawals/range                               inclusive date range
/// /withdrawals/{id}                                get
///
/// /visits                                          list, record
/// /visits/{id}                                     get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/beneficiaries", beneficiaries::router())
        .nest("/withdrawals", withdrawals::router())
        .nest("/visits", visits::router())
}
