//! Dashboard metric aggregation.
//!
//! The aggregation is a single pass over the campaign collection. Conversion
//! rate and ROI are not derived from campaign data; they are configured
//! constants carried through [`MetricPlaceholders`].

use serde::Serialize;

use crate::campaign::CampaignStatus;

/// Configured values for metrics that are not computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricPlaceholders {
    pub conversion_rate: f64,
    pub roi: f64,
}

impl Default for MetricPlaceholders {
    fn default() -> Self {
        Self {
            conversion_rate: 3.2,
            roi: 245.0,
        }
    }
}

/// Summary statistics for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub active_campaigns: usize,
    pub total_campaigns: usize,
    pub total_budget: f64,
    pub conversion_rate: f64,
    pub roi: f64,
    pub avg_progress: i64,
}

/// Running totals over a campaign scan.
#[derive(Debug, Default)]
pub struct MetricsAccumulator {
    active: usize,
    total: usize,
    budget: f64,
    progress_sum: i64,
}

impl MetricsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one campaign into the totals.
    pub fn add(&mut self, status: CampaignStatus, budget: f64, progress: i16) {
        self.total += 1;
        if status == CampaignStatus::Active {
            self.active += 1;
        }
        self.budget += budget;
        self.progress_sum += i64::from(progress);
    }

    pub fn finish(self, placeholders: MetricPlaceholders) -> DashboardMetrics {
        let avg_progress = if self.total == 0 {
            0
        } else {
            (self.progress_sum as f64 / self.total as f64).round() as i64
        };

        DashboardMetrics {
            active_campaigns: self.active,
            total_campaigns: self.total,
            total_budget: self.budget,
            conversion_rate: placeholders.conversion_rate,
            roi: placeholders.roi,
            avg_progress,
        }
    }
}
