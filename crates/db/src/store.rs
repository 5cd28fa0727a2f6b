//! Keyed collections with sequential identifiers.
//!
//! Every collection owns its own id counter. Counters start at 1, only ever
//! increase, and are never rewound by deletion, so an id is never reused.

use std::collections::BTreeMap;

use campaign_core::types::DbId;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::audit::AuditLog;
use crate::models::campaign::Campaign;

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// A single keyed collection.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<DbId, T>,
    next_id: DbId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: DbId) -> Option<&T> {
        self.rows.get(&id)
    }

    /// All rows in id order. Callers impose their own ordering.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Assign the next id, build the row with it, and store it.
    ///
    /// The row is expected to carry its own id, so the stored row is returned
    /// rather than the bare id.
    pub fn insert_with(&mut self, build: impl FnOnce(DbId) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    /// Overwrite an existing row. Returns `None` (and stores nothing) if no
    /// row with `id` exists.
    pub fn replace(&mut self, id: DbId, row: T) -> Option<&T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row;
        Some(&*slot)
    }

    /// Remove a row, returning it if it existed.
    pub fn remove(&mut self, id: DbId) -> Option<T> {
        self.rows.remove(&id)
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// The id the next insert will receive.
    pub fn peek_next_id(&self) -> DbId {
        self.next_id
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Every collection the application owns.
#[derive(Debug, Default)]
pub struct Tables {
    pub campaigns: Table<Campaign>,
    pub audit_logs: Table<AuditLog>,
}

/// The entity store: all tables behind a single lock.
///
/// A mutation and the audit entry describing it are written under the same
/// write guard, so readers never observe one without the other.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
