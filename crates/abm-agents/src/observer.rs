//! Campaign progress reporting.
//!
//! The orchestrator never logs directly; it reports to a
//! [`CampaignObserver`] handed to it at construction.

use abm_core::{AccountMetrics, CampaignResults};

use crate::agent::AgentError;

/// Receives progress events from a campaign run. All methods default to no-ops.
pub trait CampaignObserver {
    fn campaign_started(&self, _account_count: usize) {}

    /// An agent is about to handle `account_id`
    fn agent_invoked(&self, _agent: &str, _account_id: &str) {}

    fn account_processed(&self, _account_id: &str, _metrics: &AccountMetrics) {}

    fn account_failed(&self, _account_id: &str, _error: &AgentError) {}

    fn campaign_completed(&self, _results: &CampaignResults) {}
}

/// Forwards campaign events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl CampaignObserver for TracingObserver {
    fn campaign_started(&self, account_count: usize) {
        tracing::info!("Starting ABM campaign for {} accounts", account_count);
    }

    fn agent_invoked(&self, agent: &str, account_id: &str) {
        tracing::debug!(agent, account_id, "Agent invoked");
    }

    fn account_processed(&self, account_id: &str, metrics: &AccountMetrics) {
        tracing::info!(
            "Processed account: {} - Engagement: {:.2}",
            account_id,
            metrics.engagement_score
        );
    }

    fn account_failed(&self, account_id: &str, error: &AgentError) {
        tracing::error!("Failed to process account {}: {}", account_id, error);
    }

    fn campaign_completed(&self, results: &CampaignResults) {
        tracing::info!(
            processed = results.processed_count(),
            failed = results.failed_accounts().count(),
            "Campaign completed. Pipeline: £{:.0}",
            results.predicted_pipeline
        );
    }
}
