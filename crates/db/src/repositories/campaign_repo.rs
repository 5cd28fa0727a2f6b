//! Repository for the campaigns collection.

use std::cmp::Reverse;

use campaign_core::types::{DbId, Timestamp};

use crate::models::campaign::{Campaign, NewCampaign};
use crate::store::Tables;

/// Provides CRUD operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a validated campaign, stamping both timestamps with `now`.
    pub fn create(tables: &mut Tables, input: NewCampaign, now: Timestamp) -> Campaign {
        tables
            .campaigns
            .insert_with(|id| Campaign {
                id,
                name: input.name,
                description: input.description,
                campaign_type: input.campaign_type,
                status: input.status,
                budget: input.budget,
                start_date: input.start_date,
                end_date: input.end_date,
                target_audience: input.target_audience,
                progress: input.progress,
                created_at: now,
                updated_at: now,
            })
            .clone()
    }

    pub fn find_by_id(tables: &Tables, id: DbId) -> Option<Campaign> {
        tables.campaigns.get(id).cloned()
    }

    /// List all campaigns, most recently created first. Campaigns created in
    /// the same instant are ordered by id, newest first.
    pub fn list(tables: &Tables) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = tables.campaigns.iter().cloned().collect();
        campaigns.sort_by_key(|c| Reverse((c.created_at, c.id)));
        campaigns
    }

    /// Overwrite a campaign with an already-merged row.
    ///
    /// Returns `None` if no campaign with `campaign.id` exists.
    pub fn replace(tables: &mut Tables, campaign: Campaign) -> Option<Campaign> {
        tables.campaigns.replace(campaign.id, campaign).cloned()
    }

    /// Remove a campaign, returning the removed row.
    pub fn delete(tables: &mut Tables, id: DbId) -> Option<Campaign> {
        tables.campaigns.remove(id)
    }

    pub fn count(tables: &Tables) -> usize {
        tables.campaigns.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::campaign::CampaignStatus;
    use chrono::{Duration, Utc};

    fn new_campaign(name: &str) -> NewCampaign {
        let start = Utc::now();
        NewCampaign {
            name: name.to_string(),
            description: "desc".to_string(),
            campaign_type: "Social Media".to_string(),
            status: CampaignStatus::Draft,
            budget: "100".to_string(),
            start_date: start,
            end_date: start + Duration::days(7),
            target_audience: vec![],
            progress: 0,
        }
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut tables = Tables::default();
        let now = Utc::now();
        let a = CampaignRepo::create(&mut tables, new_campaign("A"), now);
        let b = CampaignRepo::create(&mut tables, new_campaign("B"), now);
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(CampaignRepo::count(&tables), 2);
    }

    #[test]
    fn list_is_newest_first() {
        let mut tables = Tables::default();
        let now = Utc::now();
        CampaignRepo::create(&mut tables, new_campaign("old"), now - Duration::hours(1));
        CampaignRepo::create(&mut tables, new_campaign("new"), now);
        CampaignRepo::create(&mut tables, new_campaign("tie"), now);

        let names: Vec<_> = CampaignRepo::list(&tables)
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["tie", "new", "old"]);
    }

    #[test]
    fn delete_removes_and_returns_row() {
        let mut tables = Tables::default();
        let created = CampaignRepo::create(&mut tables, new_campaign("gone"), Utc::now());
        let removed = CampaignRepo::delete(&mut tables, created.id);
        assert_eq!(removed, Some(created.clone()));
        assert!(CampaignRepo::find_by_id(&tables, created.id).is_none());
        assert!(CampaignRepo::delete(&mut tables, created.id).is_none());
    }

    #[test]
    fn replace_missing_campaign_is_none() {
        let mut tables = Tables::default();
        let created = CampaignRepo::create(&mut tables, new_campaign("x"), Utc::now());
        CampaignRepo::delete(&mut tables, created.id);
        assert!(CampaignRepo::replace(&mut tables, created).is_none());
        assert_eq!(CampaignRepo::count(&tables), 0);
    }
}
