//! Business constants driving the engagement and pipeline estimates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::ChannelPerformance;

/// Adjustable scoring parameters.
///
/// Every field has a default, so a config file only needs to list the
/// values it wants to change under its `scoring` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Industry baseline engagement before any boost
    pub base_engagement: f64,

    pub financial_health_threshold: f64,
    pub financial_health_boost: f64,

    pub intent_threshold: f64,
    pub intent_boost: f64,

    pub personalization_threshold: f64,
    pub personalization_boost: f64,

    /// Upper bound applied after all boosts
    pub engagement_cap: f64,

    /// Messages sent per primary channel in the multi-touch sequence
    pub touches_per_channel: u32,

    /// Base deal size per revenue bracket label
    pub deal_sizes: BTreeMap<String, f64>,

    /// Deal size for brackets missing from `deal_sizes`
    pub default_deal_size: f64,

    /// Expected performance per channel
    pub channel_performance: BTreeMap<String, ChannelPerformance>,
}

impl Default for ScoringRules {
    fn default() -> Self {
        let deal_sizes = [
            ("£1M-£5M", 50_000.0),
            ("£5M-£25M", 200_000.0),
            ("£25M-£50M", 500_000.0),
        ]
        .into_iter()
        .map(|(bracket, size)| (bracket.to_string(), size))
        .collect();

        let channel_performance = [
            ("email", ChannelPerformance::new(0.42, 0.08)),
            ("linkedin", ChannelPerformance::new(0.28, 0.12)),
            ("direct_mail", ChannelPerformance::new(0.15, 0.06)),
        ]
        .into_iter()
        .map(|(channel, perf)| (channel.to_string(), perf))
        .collect();

        Self {
            base_engagement: 0.15,
            financial_health_threshold: 0.7,
            financial_health_boost: 0.10,
            intent_threshold: 0.6,
            intent_boost: 0.15,
            personalization_threshold: 0.8,
            personalization_boost: 0.12,
            engagement_cap: 0.65,
            touches_per_channel: 3,
            deal_sizes,
            default_deal_size: 100_000.0,
            channel_performance,
        }
    }
}

impl ScoringRules {
    /// Base deal size for a revenue bracket, falling back to the default
    pub fn deal_size(&self, revenue_bracket: &str) -> f64 {
        self.deal_sizes
            .get(revenue_bracket)
            .copied()
            .unwrap_or(self.default_deal_size)
    }

    /// Reject values that would break the score and pipeline invariants
    pub fn validate(&self) -> Result<()> {
        let boosts = [
            ("base_engagement", self.base_engagement),
            ("financial_health_boost", self.financial_health_boost),
            ("intent_boost", self.intent_boost),
            ("personalization_boost", self.personalization_boost),
            ("default_deal_size", self.default_deal_size),
        ];
        for (name, value) in boosts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "scoring.{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !self.engagement_cap.is_finite() || self.engagement_cap < self.base_engagement {
            return Err(ConfigError::Invalid(format!(
                "scoring.engagement_cap ({}) must not be below base_engagement ({})",
                self.engagement_cap, self.base_engagement
            )));
        }

        if let Some((bracket, size)) = self
            .deal_sizes
            .iter()
            .find(|(_, size)| !size.is_finite() || **size < 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "scoring.deal_sizes[{bracket}] must be a non-negative number, got {size}"
            )));
        }

        Ok(())
    }
}
