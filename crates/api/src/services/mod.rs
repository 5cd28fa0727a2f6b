//! Application services.
//!
//! Services own the orchestration that spans repositories: validation,
//! timestamps, and the audit side effect of every campaign mutation. Each
//! one is constructed with an explicit store handle and is cheap to clone.

pub mod audit_recorder;
pub mod campaign_service;
pub mod metrics_aggregator;

pub use audit_recorder::{AuditEvent, AuditRecorder};
pub use campaign_service::CampaignService;
pub use metrics_aggregator::MetricsAggregator;
