//! Shared response envelope types for API handlers.
//!
//! Read-model endpoints (audit log, metrics) answer with a `{ "data": ... }`
//! envelope. Campaign CRUD endpoints return the entity directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: page }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
