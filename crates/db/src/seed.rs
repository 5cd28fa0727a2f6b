//! Demo data for local development.
//!
//! Seeding goes through the regular validation and repositories, so seeded
//! rows consume ids from the same counters as user-created ones.

use campaign_core::audit::{actions, describe_creation, AuditActor};
use campaign_core::error::CoreError;
use campaign_core::types::Timestamp;
use chrono::Duration;

use crate::models::audit::CreateAuditLog;
use crate::models::campaign::CreateCampaign;
use crate::repositories::{AuditLogRepo, CampaignRepo};
use crate::store::Tables;

/// Address attached to seeded audit entries.
const SEED_IP: &str = "192.168.1.100";

struct SampleCampaign {
    name: &'static str,
    description: &'static str,
    campaign_type: &'static str,
    status: &'static str,
    budget: &'static str,
    start_date: &'static str,
    end_date: &'static str,
    audience: &'static [&'static str],
    progress: i64,
}

const SAMPLE_CAMPAIGNS: &[SampleCampaign] = &[
    SampleCampaign {
        name: "Q4 Email Marketing Push",
        description: "End-of-year promotional email campaign targeting existing customers",
        campaign_type: "Email Marketing",
        status: "active",
        budget: "15000",
        start_date: "2024-12-01",
        end_date: "2024-12-31",
        audience: &["26-35", "36-45"],
        progress: 65,
    },
    SampleCampaign {
        name: "Social Media Brand Awareness",
        description: "Instagram and Facebook campaign to increase brand visibility",
        campaign_type: "Social Media",
        status: "active",
        budget: "8500",
        start_date: "2024-11-15",
        end_date: "2025-01-15",
        audience: &["18-25", "26-35"],
        progress: 40,
    },
    SampleCampaign {
        name: "Google Ads Holiday Campaign",
        description: "PPC campaign targeting holiday shoppers",
        campaign_type: "PPC Advertising",
        status: "completed",
        budget: "25000",
        start_date: "2024-11-01",
        end_date: "2024-12-25",
        audience: &["26-35", "36-45", "45+"],
        progress: 100,
    },
    SampleCampaign {
        name: "Content Marketing Initiative",
        description: "Blog posts and articles to drive organic traffic",
        campaign_type: "Content Marketing",
        status: "draft",
        budget: "5000",
        start_date: "2025-01-01",
        end_date: "2025-03-31",
        audience: &["26-35", "36-45"],
        progress: 10,
    },
    SampleCampaign {
        name: "Influencer Collaboration",
        description: "Partnership with industry influencers for product promotion",
        campaign_type: "Influencer Marketing",
        status: "paused",
        budget: "12000",
        start_date: "2024-10-01",
        end_date: "2024-12-31",
        audience: &["18-25", "26-35"],
        progress: 30,
    },
];

/// Historical updates: (index into the seeded campaigns, changes, days ago).
const SAMPLE_HISTORY: &[(usize, &str, i64)] = &[
    (0, "Status: draft → active", 6),
    (1, "Budget: 7500 → 8500", 4),
    (2, "Progress: 85% → 100%, Status: active → completed", 2),
    (4, "Status: active → paused", 1),
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub campaigns: usize,
    pub audit_entries: usize,
}

/// Insert the demo campaigns and their audit history.
///
/// Creation entries are backdated a few days apart and followed by the
/// historical updates, so the audit view has a believable timeline ending
/// before `now`.
pub fn seed_sample_data(
    tables: &mut Tables,
    actor: &AuditActor,
    now: Timestamp,
) -> Result<SeedSummary, CoreError> {
    let mut seeded = Vec::with_capacity(SAMPLE_CAMPAIGNS.len());
    let mut audit_entries = 0;

    for (idx, sample) in SAMPLE_CAMPAIGNS.iter().enumerate() {
        let input = CreateCampaign {
            name: Some(sample.name.to_string()),
            description: Some(sample.description.to_string()),
            campaign_type: Some(sample.campaign_type.to_string()),
            status: Some(sample.status.to_string()),
            budget: Some(sample.budget.to_string()),
            start_date: Some(sample.start_date.to_string()),
            end_date: Some(sample.end_date.to_string()),
            target_audience: Some(sample.audience.iter().map(|s| s.to_string()).collect()),
            progress: Some(sample.progress),
        }
        .validate()?;

        let campaign = CampaignRepo::create(tables, input, now);

        let days_ago = 28 - 5 * idx as i64;
        AuditLogRepo::create(
            tables,
            CreateAuditLog {
                user_id: actor.user_id.clone(),
                user_name: actor.user_name.clone(),
                action: actions::CAMPAIGN_CREATED.to_string(),
                resource: campaign.name.clone(),
                resource_id: Some(campaign.id),
                changes: Some(describe_creation(&campaign.budget, campaign.status.as_str())),
                ip_address: Some(SEED_IP.to_string()),
            },
            now - Duration::days(days_ago),
        );
        audit_entries += 1;
        seeded.push(campaign);
    }

    for &(idx, changes, days_ago) in SAMPLE_HISTORY {
        let Some(campaign) = seeded.get(idx) else {
            continue;
        };
        AuditLogRepo::create(
            tables,
            CreateAuditLog {
                user_id: actor.user_id.clone(),
                user_name: actor.user_name.clone(),
                action: actions::CAMPAIGN_UPDATED.to_string(),
                resource: campaign.name.clone(),
                resource_id: Some(campaign.id),
                changes: Some(changes.to_string()),
                ip_address: Some(SEED_IP.to_string()),
            },
            now - Duration::days(days_ago),
        );
        audit_entries += 1;
    }

    tracing::info!(
        campaigns = seeded.len(),
        audit_entries,
        "Seeded sample campaign data"
    );

    Ok(SeedSummary {
        campaigns: seeded.len(),
        audit_entries,
    })
}
