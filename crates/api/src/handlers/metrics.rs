//! Handler for dashboard metrics.

use axum::extract::State;
use axum::Json;
use campaign_core::metrics::DashboardMetrics;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/metrics
pub async fn get_metrics(State(state): State<AppState>) -> Json<DataResponse<DashboardMetrics>> {
    Json(DataResponse {
        data: state.metrics.compute().await,
    })
}
