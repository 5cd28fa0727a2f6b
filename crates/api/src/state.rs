use std::sync::Arc;

use campaign_db::DbPool;

use crate::config::ServerConfig;
use crate::services::{AuditRecorder, CampaignService, MetricsAggregator};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Campaign create/update/delete with audit side effects.
    pub campaigns: CampaignService,
    /// Audit trail access.
    pub audit: AuditRecorder,
    /// Dashboard metric aggregation.
    pub metrics: MetricsAggregator,
}

impl AppState {
    /// Wire every service to the given store.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let audit = AuditRecorder::new(pool.clone(), config.audit_actor.clone());
        let campaigns = CampaignService::new(pool.clone(), audit.clone());
        let metrics = MetricsAggregator::new(pool.clone(), config.metric_placeholders);

        Self {
            pool,
            config: Arc::new(config),
            campaigns,
            audit,
            metrics,
        }
    }
}
