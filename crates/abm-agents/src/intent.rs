//! Intent detection: buying signals and outreach timing.

use abm_core::{AccountProfile, IntentRecord, UrgencyLevel};

use crate::agent::Agent;

const PREDICTED_TIMEFRAME: &str = "3-6 months";
const KEY_SIGNALS: [&str; 2] = ["website_visits", "content_downloads"];
const OPTIMAL_TIMING: &str = "Tuesday 10:00 AM";

/// Intent Detection Agent implementation
pub struct IntentDetectionAgent {
    name: String,
}

impl IntentDetectionAgent {
    pub fn new() -> Self {
        Self {
            name: "IntentDetection".to_string(),
        }
    }

    /// Analyze buying intent signals for a profile
    pub fn analyze(&self, profile: &AccountProfile) -> IntentRecord {
        IntentRecord {
            intent_score: profile.intent_score,
            urgency: UrgencyLevel::Medium,
            predicted_timeframe: PREDICTED_TIMEFRAME.to_string(),
            signals: KEY_SIGNALS.iter().map(|s| s.to_string()).collect(),
            optimal_timing: OPTIMAL_TIMING.to_string(),
        }
    }
}

impl Default for IntentDetectionAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for IntentDetectionAgent {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::AccountIntelligenceAgent;
    use crate::agent::AccountEnricher;

    #[test]
    fn test_intent_echoes_profile_score() {
        let mut profile = AccountIntelligenceAgent::for_industry("logistics")
            .enrich("fast_freight")
            .unwrap();
        profile.intent_score = 0.31;

        let intent = IntentDetectionAgent::default().analyze(&profile);

        assert_eq!(intent.intent_score, 0.31);
        assert_eq!(intent.urgency, UrgencyLevel::Medium);
        assert_eq!(intent.predicted_timeframe, "3-6 months");
        assert_eq!(intent.signals, vec!["website_visits", "content_downloads"]);
        assert_eq!(intent.optimal_timing, "Tuesday 10:00 AM");
    }
}
