//! Service-layer tests that bypass HTTP.

mod common;

use assert_matches::assert_matches;
use campaign_api::state::AppState;
use campaign_core::error::CoreError;
use campaign_db::models::campaign::{CreateCampaign, UpdateCampaign};

fn state() -> AppState {
    AppState::new(common::test_pool(), common::test_config())
}

fn input(name: &str) -> CreateCampaign {
    CreateCampaign {
        name: Some(name.to_string()),
        description: Some("Service test".to_string()),
        campaign_type: Some("PPC Advertising".to_string()),
        budget: Some("100".to_string()),
        start_date: Some("2025-03-01".to_string()),
        end_date: Some("2025-03-31".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids_and_one_entry_each() {
    let state = state();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let campaigns = state.campaigns.clone();
            tokio::spawn(async move { campaigns.create(input(&format!("C{i}")), None).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 32);
    assert_eq!(state.campaigns.list().await.len(), 32);
    assert_eq!(state.audit.count().await, 32);
}

#[tokio::test]
async fn audit_entry_references_campaign_by_id() {
    let state = state();
    let campaign = state
        .campaigns
        .create(input("Linked"), Some("10.0.0.5".to_string()))
        .await
        .unwrap();

    let page = state.audit.list(None, None).await;
    assert_eq!(page.total_count, 1);
    assert_eq!(page.entries[0].resource_id, Some(campaign.id));
    assert_eq!(page.entries[0].ip_address.as_deref(), Some("10.0.0.5"));
    assert_eq!(page.entries[0].user_id, state.audit.actor().user_id);
}

#[tokio::test]
async fn update_reports_tracked_fields_in_fixed_order() {
    let state = state();
    let campaign = state.campaigns.create(input("Before"), None).await.unwrap();

    state
        .campaigns
        .update(
            campaign.id,
            UpdateCampaign {
                name: Some("After".to_string()),
                budget: Some("300".to_string()),
                status: Some("paused".to_string()),
                description: Some("Untracked change".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    let page = state.audit.list(Some(1), None).await;
    assert_eq!(
        page.entries[0].changes.as_deref(),
        Some("Status: draft → paused, Budget: 100 → 300, Name: Before → After")
    );
    assert_eq!(page.entries[0].resource, "After");
}

#[tokio::test]
async fn missing_campaign_is_not_found() {
    let state = state();
    assert_matches!(
        state.campaigns.get(5).await,
        Err(CoreError::NotFound { entity: "Campaign", id: 5 })
    );
    assert_matches!(
        state.campaigns.delete(5, None).await,
        Err(CoreError::NotFound { .. })
    );
}

#[tokio::test]
async fn metrics_follow_deletions() {
    let state = state();
    let keep = state.campaigns.create(input("Keep"), None).await.unwrap();
    let gone = state.campaigns.create(input("Gone"), None).await.unwrap();
    state.campaigns.delete(gone.id, None).await.unwrap();

    let metrics = state.metrics.compute().await;
    assert_eq!(metrics.total_campaigns, 1);
    assert_eq!(metrics.total_budget, 100.0);
    assert!(state.campaigns.get(keep.id).await.is_ok());
}

#[tokio::test]
async fn reformatted_budget_is_not_reported_as_a_change() {
    let state = state();
    let campaign = state.campaigns.create(input("Precise"), None).await.unwrap();

    let updated = state
        .campaigns
        .update(
            campaign.id,
            UpdateCampaign {
                budget: Some("100.00".to_string()),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(updated.budget, "100.00");
    let page = state.audit.list(Some(1), None).await;
    assert_eq!(page.entries[0].changes.as_deref(), Some(""));
}
