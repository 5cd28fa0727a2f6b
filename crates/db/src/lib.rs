//! In-memory entity store for campaigns and the audit trail.
//!
//! Storage is volatile: state lives for the lifetime of the
//! process. The store is constructed explicitly with [`create_pool`] and
//! passed to whatever needs it; there is no global instance.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

use std::sync::Arc;

use serde::Serialize;

pub use store::{Store, Table, Tables};

/// Shared handle to the entity store.
pub type DbPool = Arc<Store>;

/// Create an empty store.
pub fn create_pool() -> DbPool {
    Arc::new(Store::new())
}

/// Row counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub campaigns: usize,
    pub audit_entries: usize,
}

/// Take the read lock and report collection sizes.
pub async fn health_check(pool: &DbPool) -> StoreStats {
    let tables = pool.read().await;
    StoreStats {
        campaigns: tables.campaigns.count(),
        audit_entries: tables.audit_logs.count(),
    }
}
