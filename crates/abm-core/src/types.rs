//! Records produced and consumed by the campaign pipeline.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named stakeholder inside a target account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMaker {
    pub name: String,
    pub role: String,
    /// Influence on the buying decision [0-1]
    pub influence: f64,
}

impl DecisionMaker {
    pub fn new(name: impl Into<String>, role: impl Into<String>, influence: f64) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            influence,
        }
    }
}

/// Incumbent supplier and how likely the account is to leave it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitiveContext {
    pub current_provider: String,
    /// Probability of switching away from the incumbent [0-1]
    pub switching_probability: f64,
}

/// Account intelligence profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    /// Identifier as supplied by the caller
    pub company_id: String,
    /// Display name derived from the identifier
    pub company_name: String,
    pub industry: String,
    /// Revenue bracket label (e.g. "£5M-£25M")
    pub revenue_bracket: String,
    pub employee_count: u32,
    /// Financial health [0-1]
    pub financial_health_score: f64,
    /// Buying intent [0-1]
    pub intent_score: f64,
    /// Ordered by influence, highest first
    pub decision_makers: Vec<DecisionMaker>,
    pub pain_points: Vec<String>,
    pub competitive_context: CompetitiveContext,
}

impl AccountProfile {
    /// Most influential decision maker, if any are known
    pub fn primary_contact(&self) -> Option<&DecisionMaker> {
        self.decision_makers.first()
    }
}

/// Urgency of a detected buying intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// Intent and timing analysis for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub intent_score: f64,
    pub urgency: UrgencyLevel,
    pub predicted_timeframe: String,
    /// Observed buying signals
    pub signals: Vec<String>,
    pub optimal_timing: String,
}

/// Personalised outreach content for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub email_subject: String,
    /// Email body; `{name}` is left for the mail merge
    pub email_body: String,
    pub linkedin_message: String,
    /// Personalisation quality [0-1]
    pub personalization_score: f64,
    pub compliance_approved: bool,
}

/// Expected performance of one outreach channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelPerformance {
    pub engagement_rate: f64,
    pub conversion_rate: f64,
}

impl ChannelPerformance {
    pub const fn new(engagement_rate: f64, conversion_rate: f64) -> Self {
        Self {
            engagement_rate,
            conversion_rate,
        }
    }
}

/// Metrics computed for an account that made it through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccountMetrics {
    pub touchpoints: u32,
    pub engagement_score: f64,
    pub pipeline_value: f64,
}

/// Per-account result kept for auditing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccountStatus {
    Processed(AccountMetrics),
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountOutcome {
    pub account_id: String,
    pub status: AccountStatus,
}

impl AccountOutcome {
    pub fn processed(account_id: impl Into<String>, metrics: AccountMetrics) -> Self {
        Self {
            account_id: account_id.into(),
            status: AccountStatus::Processed(metrics),
        }
    }

    pub fn failed(account_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            status: AccountStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn metrics(&self) -> Option<&AccountMetrics> {
        match &self.status {
            AccountStatus::Processed(metrics) => Some(metrics),
            AccountStatus::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, AccountStatus::Failed { .. })
    }
}

/// Campaign execution results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResults {
    /// Number of accounts requested, including failures
    pub total_accounts: usize,
    pub total_touchpoints: u32,
    /// Mean engagement over processed accounts
    pub engagement_rate: f64,
    pub predicted_pipeline: f64,
    pub performance_by_channel: BTreeMap<String, ChannelPerformance>,
    /// One entry per requested account, in input order
    pub account_outcomes: Vec<AccountOutcome>,
}

impl CampaignResults {
    pub fn processed_count(&self) -> usize {
        self.account_outcomes.iter().filter(|o| !o.is_failed()).count()
    }

    pub fn failed_accounts(&self) -> impl Iterator<Item = &AccountOutcome> {
        self.account_outcomes.iter().filter(|o| o.is_failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> AccountMetrics {
        AccountMetrics {
            touchpoints: 6,
            engagement_score: 0.52,
            pipeline_value: 67_600.0,
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = AccountOutcome::processed("acme_mfg", metrics());
        let failed = AccountOutcome::failed("", "Empty input");

        assert_eq!(ok.metrics(), Some(&metrics()));
        assert!(!ok.is_failed());
        assert!(failed.metrics().is_none());
        assert!(failed.is_failed());
    }

    #[test]
    fn test_results_counts() {
        let results = CampaignResults {
            total_accounts: 2,
            total_touchpoints: 6,
            engagement_rate: 0.52,
            predicted_pipeline: 67_600.0,
            performance_by_channel: BTreeMap::new(),
            account_outcomes: vec![
                AccountOutcome::processed("acme_mfg", metrics()),
                AccountOutcome::failed("  ", "Empty input"),
            ],
        };

        assert_eq!(results.processed_count(), 1);
        assert_eq!(results.failed_accounts().count(), 1);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let failed = AccountOutcome::failed("ghost", "no data");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"]["outcome"], "failed");
        assert_eq!(json["status"]["reason"], "no data");
    }

    #[test]
    fn test_urgency_display() {
        assert_eq!(UrgencyLevel::Medium.to_string(), "medium");
        let json = serde_json::to_string(&UrgencyLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }
}
