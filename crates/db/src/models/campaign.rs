//! Campaign entity model and DTOs.
//!
//! Request DTOs keep every field optional so that missing input surfaces as a
//! field-level validation error rather than a deserialization failure.
//! `validate` turns them into the typed [`NewCampaign`] / [`CampaignPatch`].

use campaign_core::campaign::{
    check_progress, check_schedule, normalize_audience, parse_budget, parse_schedule_date,
    parse_status, require_text, CampaignStatus,
};
use campaign_core::error::CoreError;
use campaign_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub status: CampaignStatus,
    /// Decimal amount as entered, e.g. `"15000"` or `"99.50"`.
    pub budget: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub target_audience: Vec<String>,
    pub progress: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// DTO for creating a campaign.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaign {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub budget: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Defaults to empty if omitted.
    pub target_audience: Option<Vec<String>>,
    /// Defaults to 0 if omitted.
    pub progress: Option<i64>,
}

/// A validated campaign ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCampaign {
    pub name: String,
    pub description: String,
    pub campaign_type: String,
    pub status: CampaignStatus,
    pub budget: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub target_audience: Vec<String>,
    pub progress: i16,
}

impl CreateCampaign {
    /// Check every field and apply defaults.
    ///
    /// All offending fields are reported together.
    pub fn validate(self) -> Result<NewCampaign, CoreError> {
        let mut errors = Vec::new();

        let name = require_text("name", self.name.as_deref(), &mut errors);
        let description = require_text("description", self.description.as_deref(), &mut errors);
        let campaign_type = require_text("type", self.campaign_type.as_deref(), &mut errors);

        let budget = require_text("budget", self.budget.as_deref(), &mut errors)
            .and_then(|b| parse_budget("budget", &b, &mut errors));
        let start_date = require_text("startDate", self.start_date.as_deref(), &mut errors)
            .and_then(|d| parse_schedule_date("startDate", &d, &mut errors));
        let end_date = require_text("endDate", self.end_date.as_deref(), &mut errors)
            .and_then(|d| parse_schedule_date("endDate", &d, &mut errors));

        let status = match self.status.as_deref() {
            Some(s) => parse_status("status", s, &mut errors),
            None => Some(CampaignStatus::default()),
        };
        let progress = match self.progress {
            Some(p) => check_progress("progress", p, &mut errors),
            None => Some(0),
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            check_schedule(start, end, &mut errors);
        }

        match (
            name,
            description,
            campaign_type,
            budget,
            start_date,
            end_date,
            status,
            progress,
        ) {
            (
                Some(name),
                Some(description),
                Some(campaign_type),
                Some(budget),
                Some(start_date),
                Some(end_date),
                Some(status),
                Some(progress),
            ) if errors.is_empty() => Ok(NewCampaign {
                name,
                description,
                campaign_type,
                status,
                budget,
                start_date,
                end_date,
                target_audience: normalize_audience(self.target_audience.unwrap_or_default()),
                progress,
            }),
            _ => Err(CoreError::Validation(errors)),
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

/// DTO for updating a campaign. All fields are optional; absent (or `null`)
/// fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub status: Option<String>,
    pub budget: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub target_audience: Option<Vec<String>>,
    pub progress: Option<i64>,
}

/// A validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<String>,
    pub status: Option<CampaignStatus>,
    pub budget: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub target_audience: Option<Vec<String>>,
    pub progress: Option<i16>,
}

impl UpdateCampaign {
    /// Check each present field. The merged schedule is checked separately
    /// by [`CampaignPatch::apply`] because it depends on the stored row.
    pub fn validate(self) -> Result<CampaignPatch, CoreError> {
        let mut errors = Vec::new();

        let name = self
            .name
            .as_deref()
            .and_then(|v| require_text("name", Some(v), &mut errors));
        let description = self
            .description
            .as_deref()
            .and_then(|v| require_text("description", Some(v), &mut errors));
        let campaign_type = self
            .campaign_type
            .as_deref()
            .and_then(|v| require_text("type", Some(v), &mut errors));
        let status = self
            .status
            .as_deref()
            .and_then(|v| parse_status("status", v, &mut errors));
        let budget = self
            .budget
            .as_deref()
            .and_then(|v| parse_budget("budget", v, &mut errors));
        let start_date = self
            .start_date
            .as_deref()
            .and_then(|v| parse_schedule_date("startDate", v, &mut errors));
        let end_date = self
            .end_date
            .as_deref()
            .and_then(|v| parse_schedule_date("endDate", v, &mut errors));
        let progress = self
            .progress
            .and_then(|v| check_progress("progress", v, &mut errors));

        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(CampaignPatch {
            name,
            description,
            campaign_type,
            status,
            budget,
            start_date,
            end_date,
            target_audience: self.target_audience.map(normalize_audience),
            progress,
        })
    }
}

impl CampaignPatch {
    /// Merge this patch over `existing`, producing the updated row.
    ///
    /// `id` and `created_at` are carried over unchanged; `updated_at` is set
    /// to `now`, but never earlier than `created_at`. Fails if the merged
    /// schedule ends before it starts.
    pub fn apply(&self, existing: &Campaign, now: Timestamp) -> Result<Campaign, CoreError> {
        let start_date = self.start_date.unwrap_or(existing.start_date);
        let end_date = self.end_date.unwrap_or(existing.end_date);

        let mut errors = Vec::new();
        check_schedule(start_date, end_date, &mut errors);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        Ok(Campaign {
            id: existing.id,
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            campaign_type: self
                .campaign_type
                .clone()
                .unwrap_or_else(|| existing.campaign_type.clone()),
            status: self.status.unwrap_or(existing.status),
            budget: self.budget.clone().unwrap_or_else(|| existing.budget.clone()),
            start_date,
            end_date,
            target_audience: self
                .target_audience
                .clone()
                .unwrap_or_else(|| existing.target_audience.clone()),
            progress: self.progress.unwrap_or(existing.progress),
            created_at: existing.created_at,
            updated_at: now.max(existing.created_at),
        })
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body returned by a successful delete.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
