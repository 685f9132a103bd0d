use std::sync::Arc;

use assist_core::clock::Clock;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: assist_db::DbPool,
    /// Source of "today" for eligibility checks.
    pub clock: Arc<dyn Clock>,
}
