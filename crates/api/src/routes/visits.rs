use axum::routing::get;
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Routes mounted at `/visits`.
///
/// ```text
/// GET    /              -> list_visits
/// POST   /              -> create_visit
/// GET    /{id}          -> get_visit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visits::list_visits).post(visits::create_visit))
        .route("/{id}", get(visits::get_visit))
}
