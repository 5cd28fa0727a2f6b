//! Handlers for the audit trail.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use campaign_db::models::audit::AuditLogPage;

use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/audit-logs?limit=&offset=
///
/// Newest entries first. A missing, unparseable or non-positive `limit`
/// means 50; an `offset` past the end returns an empty page. This endpoint
/// never rejects its query string.
pub async fn list_audit_logs(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Json<DataResponse<AuditLogPage>> {
    let params = query.map(|Query(params)| params).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Ignoring malformed pagination query");
        PaginationParams::default()
    });
    let page = state.audit.list(params.limit(), params.offset()).await;
    Json(DataResponse { data: page })
}
