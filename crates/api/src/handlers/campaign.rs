//! Handlers for the `/campaigns` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campaign_core::types::DbId;
use campaign_db::models::campaign::{Campaign, CreateCampaign, DeleteResponse, UpdateCampaign};

use crate::error::AppResult;
use crate::middleware::client_ip::ClientIp;
use crate::state::AppState;

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    payload: Result<Json<CreateCampaign>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    let Json(input) = payload?;
    let campaign = state.campaigns.create(input, Some(ip)).await?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /api/v1/campaigns
pub async fn list(State(state): State<AppState>) -> Json<Vec<Campaign>> {
    Json(state.campaigns.list().await)
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Campaign>> {
    let Path(id) = path?;
    let campaign = state.campaigns.get(id).await?;
    Ok(Json(campaign))
}

/// PUT|PATCH /api/v1/campaigns/{id}
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    ClientIp(ip): ClientIp,
    payload: Result<Json<UpdateCampaign>, JsonRejection>,
) -> AppResult<Json<Campaign>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let campaign = state.campaigns.update(id, input, Some(ip)).await?;
    Ok(Json(campaign))
}

/// DELETE /api/v1/campaigns/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    ClientIp(ip): ClientIp,
) -> AppResult<Json<DeleteResponse>> {
    let Path(id) = path?;
    let success = state.campaigns.delete(id, Some(ip)).await?;
    Ok(Json(DeleteResponse { success }))
}
