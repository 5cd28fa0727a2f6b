//! Campaign status lifecycle and field-level validation.
//!
//! Validators push into a shared `Vec<FieldError>` instead of returning on the
//! first failure, so a rejected request reports every offending field at once.

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::types::Timestamp;

/// Entity name used in not-found errors and log events.
pub const ENTITY_NAME: &str = "Campaign";

/// Inclusive upper bound for `progress`.
pub const MAX_PROGRESS: i16 = 100;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [
        Self::Draft,
        Self::Active,
        Self::Paused,
        Self::Completed,
    ];

    /// String representation for display, audit descriptions and the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!("must be one of draft, active, paused, completed (got '{s}')")
            })
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

/// Require a non-blank text value. Returns the trimmed value when valid.
pub fn require_text(
    field: &'static str,
    value: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        Some(_) => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

/// Largest accepted budget. Keeps dashboard totals finite.
pub const MAX_BUDGET: f64 = 1_000_000_000_000.0;

/// Validate a budget: a plain non-negative decimal such as `1500` or
/// `1500.50`, no larger than [`MAX_BUDGET`].
///
/// Exponents, signs, `inf` and `NaN` are rejected. The trimmed input is kept
/// as the stored value so the audit trail shows exactly what the user
/// entered.
pub fn parse_budget(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
        return None;
    }
    if trimmed
        .strip_prefix('-')
        .is_some_and(is_plain_decimal)
    {
        errors.push(FieldError::new(field, "must be a non-negative amount"));
        return None;
    }
    if !is_plain_decimal(trimmed) {
        errors.push(FieldError::new(field, "must be a decimal number"));
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount <= MAX_BUDGET => Some(trimmed.to_string()),
        _ => {
            errors.push(FieldError::new(
                field,
                format!("must not exceed {MAX_BUDGET}"),
            ));
            None
        }
    }
}

/// Digits with an optional fractional part: `12`, `12.5`.
fn is_plain_decimal(value: &str) -> bool {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

/// Numeric value of a stored budget. Stored budgets are always valid, so a
/// parse failure only happens for hand-built rows and counts as zero.
pub fn budget_amount(budget: &str) -> f64 {
    budget.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse a schedule date: either `YYYY-MM-DD` (midnight UTC) or RFC 3339.
pub fn parse_schedule_date(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Timestamp> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
        return None;
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive)),
        Err(_) => {
            errors.push(FieldError::new(
                field,
                format!("'{trimmed}' is not a valid date (expected YYYY-MM-DD)"),
            ));
            None
        }
    }
}

/// Validate a status string.
pub fn parse_status(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<CampaignStatus> {
    match value.trim().parse::<CampaignStatus>() {
        Ok(status) => Some(status),
        Err(msg) => {
            errors.push(FieldError::new(field, msg));
            None
        }
    }
}

/// Validate progress is within `0..=100`.
pub fn check_progress(
    field: &'static str,
    value: i64,
    errors: &mut Vec<FieldError>,
) -> Option<i16> {
    if (0..=i64::from(MAX_PROGRESS)).contains(&value) {
        // In range, so the narrowing cast is lossless.
        Some(value as i16)
    } else {
        errors.push(FieldError::new(
            field,
            format!("must be between 0 and {MAX_PROGRESS}"),
        ));
        None
    }
}

/// Reject schedules whose end precedes their start.
pub fn check_schedule(start: Timestamp, end: Timestamp, errors: &mut Vec<FieldError>) {
    if end < start {
        errors.push(FieldError::new("endDate", "must not be before startDate"));
    }
}

/// Normalize audience tags: trim, drop blanks, sort and de-duplicate.
///
/// Audience segments form a set, so the stored order carries no meaning.
pub fn normalize_audience(tags: Vec<String>) -> Vec<String> {
    let mut tags: Vec<String> = tags
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
