//! Audit log entity models and DTOs.
//!
//! Audit entries have no `updated_at` field: they are immutable once
//! appended, and nothing in the store edits or removes them.

use campaign_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A single audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    /// Name of the campaign at the time of the action.
    pub resource: String,
    /// May reference a campaign that no longer exists.
    pub resource_id: Option<DbId>,
    pub changes: Option<String>,
    pub ip_address: Option<String>,
    pub timestamp: Timestamp,
}

/// DTO for appending an audit log entry. The id and timestamp are assigned
/// on insert.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub resource: String,
    pub resource_id: Option<DbId>,
    pub changes: Option<String>,
    pub ip_address: Option<String>,
}

/// One page of audit entries plus the unpaginated total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogPage {
    pub entries: Vec<AuditLog>,
    pub total_count: usize,
}
