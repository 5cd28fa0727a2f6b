//! Appends audit entries and serves the paginated audit trail.

use campaign_core::audit::{page_window, AuditActor, ChangeSet};
use campaign_core::campaign::budget_amount;
use campaign_core::types::DbId;
use campaign_db::models::audit::{AuditLog, AuditLogPage, CreateAuditLog};
use campaign_db::models::campaign::{Campaign, CampaignPatch};
use campaign_db::repositories::AuditLogRepo;
use campaign_db::{DbPool, Tables};

/// One auditable action, before the actor and timestamp are attached.
#[derive(Debug, Clone)]
pub struct AuditEvent<'a> {
    pub action: &'a str,
    pub resource: &'a str,
    pub resource_id: Option<DbId>,
    pub changes: Option<String>,
    pub ip_address: Option<String>,
}

/// Records audit entries on behalf of the configured actor.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    pool: DbPool,
    actor: AuditActor,
}

impl AuditRecorder {
    pub fn new(pool: DbPool, actor: AuditActor) -> Self {
        Self { pool, actor }
    }

    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }

    /// Append an entry using tables the caller has already locked.
    ///
    /// Callers pass the write guard they used for the mutation so the change
    /// and its audit entry land together.
    pub fn record(&self, tables: &mut Tables, event: AuditEvent<'_>) -> AuditLog {
        let entry = AuditLogRepo::create(
            tables,
            CreateAuditLog {
                user_id: self.actor.user_id.clone(),
                user_name: self.actor.user_name.clone(),
                action: event.action.to_string(),
                resource: event.resource.to_string(),
                resource_id: event.resource_id,
                changes: event.changes,
                ip_address: event.ip_address,
            },
            chrono::Utc::now(),
        );

        tracing::debug!(
            audit_id = entry.id,
            action = %entry.action,
            resource_id = ?entry.resource_id,
            "Audit entry recorded",
        );

        entry
    }

    /// Newest-first page of the audit trail plus the total entry count.
    pub async fn list(&self, limit: Option<i64>, offset: Option<i64>) -> AuditLogPage {
        let (limit, offset) = page_window(limit, offset);
        let tables = self.pool.read().await;
        AuditLogPage {
            entries: AuditLogRepo::query(&tables, limit, offset),
            total_count: AuditLogRepo::count(&tables),
        }
    }

    pub async fn count(&self) -> usize {
        AuditLogRepo::count(&*self.pool.read().await)
    }

    /// Describe an update by comparing the stored row with the patch.
    ///
    /// Only status, budget and name are tracked, and only when the patch
    /// supplies a different value. Budgets are compared by amount, so
    /// `1000` to `1000.00` is not a change.
    pub fn describe_update(before: &Campaign, patch: &CampaignPatch) -> String {
        let new_budget = patch
            .budget
            .as_deref()
            .filter(|b| budget_amount(b) != budget_amount(&before.budget));

        let mut changes = ChangeSet::new();
        changes.track("Status", &before.status, patch.status.as_ref());
        changes.track("Budget", before.budget.as_str(), new_budget);
        changes.track("Name", before.name.as_str(), patch.name.as_deref());
        changes.describe()
    }
}
