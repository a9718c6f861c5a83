//! Engagement and pipeline estimates.

use abm_core::{AccountProfile, ContentRecord, ScoringRules};

/// Predicted engagement based on account quality, intent and personalisation.
///
/// Starts from the baseline, adds each boost whose threshold is strictly
/// exceeded, and caps the total at `rules.engagement_cap`.
pub fn engagement_score(
    rules: &ScoringRules,
    profile: &AccountProfile,
    content: &ContentRecord,
) -> f64 {
    let mut score = rules.base_engagement;

    if profile.financial_health_score > rules.financial_health_threshold {
        score += rules.financial_health_boost;
    }
    if profile.intent_score > rules.intent_threshold {
        score += rules.intent_boost;
    }
    if content.personalization_score > rules.personalization_threshold {
        score += rules.personalization_boost;
    }

    score.min(rules.engagement_cap)
}

/// Expected pipeline value: base deal size × engagement × intent.
///
/// Intent is clamped to [0, 1] and engagement to ≥ 0 so profiles from any
/// enricher yield a non-negative value.
pub fn pipeline_value(rules: &ScoringRules, profile: &AccountProfile, engagement: f64) -> f64 {
    let intent = profile.intent_score.clamp(0.0, 1.0);
    rules.deal_size(&profile.revenue_bracket) * engagement.max(0.0) * intent
}
