//! Dashboard metrics, recomputed from the campaign collection per request.

use campaign_core::campaign::budget_amount;
use campaign_core::metrics::{DashboardMetrics, MetricPlaceholders, MetricsAccumulator};
use campaign_db::DbPool;

#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    pool: DbPool,
    placeholders: MetricPlaceholders,
}

impl MetricsAggregator {
    pub fn new(pool: DbPool, placeholders: MetricPlaceholders) -> Self {
        Self { pool, placeholders }
    }

    /// Scan every campaign and summarize.
    pub async fn compute(&self) -> DashboardMetrics {
        let tables = self.pool.read().await;
        let mut acc = MetricsAccumulator::new();
        for campaign in tables.campaigns.iter() {
            acc.add(
                campaign.status,
                budget_amount(&campaign.budget),
                campaign.progress,
            );
        }
        acc.finish(self.placeholders)
    }
}
