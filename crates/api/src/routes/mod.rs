pub mod audit;
pub mod campaign;
pub mod health;
pub mod metrics;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                 list, create
/// /campaigns/{id}            get, update (PUT or PATCH), delete
///
/// /audit-logs                list (?limit, offset)
///
/// /metrics                   dashboard metrics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Campaign CRUD; every mutation appends an audit entry.
        .nest("/campaigns", campaign::router())
        // Append-only audit trail.
        .nest("/audit-logs", audit::router())
        // Aggregated dashboard metrics.
        .nest("/metrics", metrics::router())
}
