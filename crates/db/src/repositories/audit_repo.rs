//! Repository for the append-only audit log collection.
//!
//! Entries are only ever appended.

use std::cmp::Reverse;

use campaign_core::types::Timestamp;

use crate::models::audit::{AuditLog, CreateAuditLog};
use crate::store::Tables;

/// Provides append and query operations for audit logs.
pub struct AuditLogRepo;

impl AuditLogRepo {
    /// Append an entry stamped with `timestamp`.
    pub fn create(tables: &mut Tables, input: CreateAuditLog, timestamp: Timestamp) -> AuditLog {
        tables
            .audit_logs
            .insert_with(|id| AuditLog {
                id,
                user_id: input.user_id,
                user_name: input.user_name,
                action: input.action,
                resource: input.resource,
                resource_id: input.resource_id,
                changes: input.changes,
                ip_address: input.ip_address,
                timestamp,
            })
            .clone()
    }

    /// Entries newest first, sliced to `[offset, offset + limit)`.
    ///
    /// Entries sharing a timestamp are ordered by id, newest first. An offset
    /// past the end yields an empty page.
    pub fn query(tables: &Tables, limit: usize, offset: usize) -> Vec<AuditLog> {
        let mut entries: Vec<&AuditLog> = tables.audit_logs.iter().collect();
        entries.sort_by_key(|e| Reverse((e.timestamp, e.id)));
        entries
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Total entries regardless of pagination.
    pub fn count(tables: &Tables) -> usize {
        tables.audit_logs.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn entry(resource: &str) -> CreateAuditLog {
        CreateAuditLog {
            user_id: "user-1".to_string(),
            user_name: "Sarah Johnson".to_string(),
            action: "Campaign Created".to_string(),
            resource: resource.to_string(),
            resource_id: Some(1),
            changes: None,
            ip_address: None,
        }
    }

    #[test]
    fn query_orders_by_timestamp_descending() {
        let mut tables = Tables::default();
        let now = Utc::now();
        AuditLogRepo::create(&mut tables, entry("oldest"), now - Duration::days(3));
        AuditLogRepo::create(&mut tables, entry("newest"), now);
        AuditLogRepo::create(&mut tables, entry("middle"), now - Duration::days(1));

        let resources: Vec<_> = AuditLogRepo::query(&tables, 50, 0)
            .into_iter()
            .map(|e| e.resource)
            .collect();
        assert_eq!(resources, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn query_paginates() {
        let mut tables = Tables::default();
        let now = Utc::now();
        for i in 0..5 {
            AuditLogRepo::create(&mut tables, entry(&format!("e{i}")), now + Duration::seconds(i));
        }

        let page: Vec<_> = AuditLogRepo::query(&tables, 2, 0)
            .into_iter()
            .map(|e| e.resource)
            .collect();
        assert_eq!(page, vec!["e4", "e3"]);

        let page: Vec<_> = AuditLogRepo::query(&tables, 2, 4)
            .into_iter()
            .map(|e| e.resource)
            .collect();
        assert_eq!(page, vec!["e0"]);

        assert!(AuditLogRepo::query(&tables, 2, 10).is_empty());
        assert_eq!(AuditLogRepo::count(&tables), 5);
    }

    #[test]
    fn identical_timestamps_fall_back_to_id() {
        let mut tables = Tables::default();
        let now = Utc::now();
        let first = AuditLogRepo::create(&mut tables, entry("first"), now);
        let second = AuditLogRepo::create(&mut tables, entry("second"), now);
        let ids: Vec<_> = AuditLogRepo::query(&tables, 10, 0)
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }
}
