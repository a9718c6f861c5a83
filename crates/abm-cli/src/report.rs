//! Human-readable campaign reports.

use abm_agents::display_name;
use abm_core::{AccountStatus, CampaignConfig, CampaignResults, IndustryTemplate};

/// `67600.4` → `£67,600`
pub fn format_pounds(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

/// `0.52` → `52.0%`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

pub fn render_results(results: &CampaignResults) -> String {
    let mut lines = vec![
        "📊 Campaign Results:".to_string(),
        format!("   Accounts: {}", results.total_accounts),
        format!("   Touchpoints: {}", results.total_touchpoints),
        format!("   Engagement: {}", format_percent(results.engagement_rate)),
        format!("   Pipeline: {}", format_pounds(results.predicted_pipeline)),
    ];

    if !results.performance_by_channel.is_empty() {
        lines.push(String::new());
        lines.push("📬 Expected Channel Performance:".to_string());
        lines.extend(results.performance_by_channel.iter().map(|(channel, perf)| {
            format!(
                "   {:<12} engagement {:>6}   conversion {:>6}",
                channel,
                format_percent(perf.engagement_rate),
                format_percent(perf.conversion_rate)
            )
        }));
    }

    let skipped: Vec<String> = results
        .failed_accounts()
        .filter_map(|outcome| match &outcome.status {
            AccountStatus::Failed { reason } => {
                Some(format!("   {:?}: {}", outcome.account_id, reason))
            }
            AccountStatus::Processed(_) => None,
        })
        .collect();
    if !skipped.is_empty() {
        lines.push(String::new());
        lines.push("⚠️  Skipped Accounts:".to_string());
        lines.extend(skipped);
    }

    lines.join("\n")
}

pub fn render_config_summary(
    config: &CampaignConfig,
    template_name: &str,
    template: Option<&IndustryTemplate>,
) -> String {
    let mut lines = vec![
        "⚙️  Configuration:".to_string(),
        format!("   Current Industry: {}", config.target_market.industry),
        format!(
            "   Decision Makers: {}",
            config.target_market.decision_makers.join(", ")
        ),
        format!("   Primary Channels: {}", config.channels.primary.join(", ")),
    ];

    match template {
        Some(template) => {
            lines.push(String::new());
            lines.push(format!(
                "🔄 Alternative Configuration ({}):",
                display_name(template_name)
            ));
            lines.push(format!(
                "   Decision Cycle: {}",
                template.characteristics.decision_cycle
            ));
            lines.push(format!(
                "   Communication: {}",
                template.characteristics.communication_style
            ));
            lines.push(format!("   Key Themes: {}", template.top_themes(3).join(", ")));
        }
        None => lines.push(format!("   ({template_name} template not available)")),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use abm_core::{AccountMetrics, AccountOutcome, IndustryCharacteristics, ScoringRules};
    use serde_json::json;

    fn results() -> CampaignResults {
        CampaignResults {
            total_accounts: 2,
            total_touchpoints: 6,
            engagement_rate: 0.52,
            predicted_pipeline: 67_600.0,
            performance_by_channel: ScoringRules::default().channel_performance,
            account_outcomes: vec![
                AccountOutcome::processed(
                    "acme_mfg",
                    AccountMetrics {
                        touchpoints: 6,
                        engagement_score: 0.52,
                        pipeline_value: 67_600.0,
                    },
                ),
                AccountOutcome::failed("", "Invalid input: Empty input"),
            ],
        }
    }

    fn config() -> CampaignConfig {
        CampaignConfig::from_value(json!({
            "target_market": { "industry": "manufacturing", "decision_makers": ["CEO", "CFO"] },
            "ai_models": {},
            "channels": { "primary": ["email", "linkedin"] }
        }))
        .unwrap()
    }

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(0.0), "£0");
        assert_eq!(format_pounds(999.0), "£999");
        assert_eq!(format_pounds(67_600.0), "£67,600");
        assert_eq!(format_pounds(202_800.4), "£202,800");
        assert_eq!(format_pounds(1_234_567.0), "£1,234,567");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.52), "52.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_render_results() {
        let report = render_results(&results());
        assert!(report.contains("Accounts: 2"));
        assert!(report.contains("Touchpoints: 6"));
        assert!(report.contains("Engagement: 52.0%"));
        assert!(report.contains("Pipeline: £67,600"));
        assert!(report.contains("email"));
        assert!(report.contains("Skipped Accounts"));
        assert!(report.contains("\"\": Invalid input: Empty input"));
    }

    #[test]
    fn test_config_summary_with_template() {
        let template = IndustryTemplate {
            characteristics: IndustryCharacteristics {
                decision_cycle: "2-4 months".to_string(),
                communication_style: "data-driven".to_string(),
            },
            content_themes: vec![
                "scalability".to_string(),
                "integration".to_string(),
                "security".to_string(),
                "roi".to_string(),
            ],
        };

        let summary = render_config_summary(&config(), "technology", Some(&template));
        assert!(summary.contains("Current Industry: manufacturing"));
        assert!(summary.contains("Decision Makers: CEO, CFO"));
        assert!(summary.contains("Primary Channels: email, linkedin"));
        assert!(summary.contains("Alternative Configuration (Technology):"));
        assert!(summary.contains("Key Themes: scalability, integration, security"));
        assert!(!summary.contains("roi"));
    }

    #[test]
    fn test_config_summary_without_template() {
        let summary = render_config_summary(&config(), "retail", None);
        assert!(summary.contains("(retail template not available)"));
    }
}
