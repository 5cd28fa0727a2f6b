//! Repository layer.
//!
//! Each repository is a zero-sized struct whose methods take the locked
//! [`Tables`](crate::Tables) as their first argument. Callers decide how long
//! the lock is held, which lets a mutation and its audit append share one
//! write guard.

pub mod audit_repo;
pub mod campaign_repo;

pub use audit_repo::AuditLogRepo;
pub use campaign_repo::CampaignRepo;
