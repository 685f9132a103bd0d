use axum::routing::get;
use axum::Router;

use crate::handlers::withdrawals;
use crate::state::AppState;

/// Routes mounted at `/withdrawals`.
///
/// ```text
/// GET    /              -> list_withdrawals
/// POST   /              -> create_withdrawal
/// GET    /stats         -> get_stats
/// GET    /range         -> list_in_range
/// GET    /{id}          -> get_withdrawal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(withdrawals::list_withdrawals).post(withdrawals::create_withdrawal),
        )
        .route("/stats", get(withdrawals::get_stats))
        .route("/range", get(withdrawals::list_in_range))
        .route("/{id}", get(withdrawals::get_withdrawal))
}
