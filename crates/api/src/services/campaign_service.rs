//! Campaign create/read/update/delete.
//!
//! Every mutation holds the store's write guard from the existence check
//! through the audit append, so a campaign change and its audit entry are
//! applied as one unit and a rejected request leaves no trace.

use campaign_core::audit::{actions, describe_creation, describe_deletion};
use campaign_core::campaign::ENTITY_NAME;
use campaign_core::error::CoreError;
use campaign_core::types::DbId;
use campaign_db::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};
use campaign_db::repositories::CampaignRepo;
use campaign_db::DbPool;

use crate::services::audit_recorder::{AuditEvent, AuditRecorder};

#[derive(Debug, Clone)]
pub struct CampaignService {
    pool: DbPool,
    audit: AuditRecorder,
}

impl CampaignService {
    pub fn new(pool: DbPool, audit: AuditRecorder) -> Self {
        Self { pool, audit }
    }

    /// All campaigns, newest first.
    pub async fn list(&self) -> Vec<Campaign> {
        CampaignRepo::list(&*self.pool.read().await)
    }

    pub async fn get(&self, id: DbId) -> Result<Campaign, CoreError> {
        CampaignRepo::find_by_id(&*self.pool.read().await, id).ok_or(not_found(id))
    }

    /// Validate and insert a campaign, then record `Campaign Created`.
    pub async fn create(
        &self,
        input: CreateCampaign,
        ip_address: Option<String>,
    ) -> Result<Campaign, CoreError> {
        let new_campaign = input.validate()?;

        let mut tables = self.pool.write().await;
        let campaign = CampaignRepo::create(&mut tables, new_campaign, chrono::Utc::now());
        self.audit.record(
            &mut tables,
            AuditEvent {
                action: actions::CAMPAIGN_CREATED,
                resource: &campaign.name,
                resource_id: Some(campaign.id),
                changes: Some(describe_creation(&campaign.budget, campaign.status.as_str())),
                ip_address,
            },
        );
        drop(tables);

        tracing::info!(campaign_id = campaign.id, name = %campaign.name, "Campaign created");
        Ok(campaign)
    }

    /// Apply a partial update, then record `Campaign Updated` with a
    /// description of the tracked fields that changed.
    pub async fn update(
        &self,
        id: DbId,
        input: UpdateCampaign,
        ip_address: Option<String>,
    ) -> Result<Campaign, CoreError> {
        let mut tables = self.pool.write().await;

        let existing = CampaignRepo::find_by_id(&tables, id).ok_or(not_found(id))?;
        let patch = input.validate()?;
        let changes = AuditRecorder::describe_update(&existing, &patch);
        let merged = patch.apply(&existing, chrono::Utc::now())?;

        let updated = CampaignRepo::replace(&mut tables, merged).ok_or_else(|| {
            CoreError::Internal(format!("campaign {id} vanished while write-locked"))
        })?;
        self.audit.record(
            &mut tables,
            AuditEvent {
                action: actions::CAMPAIGN_UPDATED,
                resource: &updated.name,
                resource_id: Some(id),
                changes: Some(changes),
                ip_address,
            },
        );
        drop(tables);

        tracing::info!(campaign_id = id, "Campaign updated");
        Ok(updated)
    }

    /// Remove a campaign, then record `Campaign Deleted` with its final budget.
    ///
    /// The campaign's audit history is left untouched.
    pub async fn delete(&self, id: DbId, ip_address: Option<String>) -> Result<bool, CoreError> {
        let mut tables = self.pool.write().await;

        let removed = CampaignRepo::delete(&mut tables, id).ok_or(not_found(id))?;
        self.audit.record(
            &mut tables,
            AuditEvent {
                action: actions::CAMPAIGN_DELETED,
                resource: &removed.name,
                resource_id: Some(id),
                changes: Some(describe_deletion(&removed.budget)),
                ip_address,
            },
        );
        drop(tables);

        tracing::info!(campaign_id = id, name = %removed.name, "Campaign deleted");
        Ok(true)
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY_NAME,
        id,
    }
}
