//! Account intelligence: builds an enriched profile from an identifier.

use abm_core::{AccountProfile, CampaignConfig, CompetitiveContext, DecisionMaker};

use crate::agent::{AccountEnricher, Agent, AgentResult};

const REVENUE_BRACKET: &str = "£5M-£25M";
const EMPLOYEE_COUNT: u32 = 150;
const FINANCIAL_HEALTH: f64 = 0.78;
const INTENT_SCORE: f64 = 0.65;
const PAIN_POINTS: [&str; 2] = ["expansion_capital", "cash_flow_optimization"];
const CURRENT_PROVIDER: &str = "Traditional Bank";
const SWITCHING_PROBABILITY: f64 = 0.4;

/// Simulated enrichment: every account gets the same firmographics, with
/// the name taken from the identifier and the industry from configuration.
pub struct AccountIntelligenceAgent {
    industry: String,
    name: String,
}

impl AccountIntelligenceAgent {
    pub fn new(config: &CampaignConfig) -> Self {
        Self::for_industry(config.target_market.industry.clone())
    }

    pub fn for_industry(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            name: "AccountIntelligence".to_string(),
        }
    }

    fn decision_makers() -> Vec<DecisionMaker> {
        vec![
            DecisionMaker::new("Sarah Johnson", "CEO", 0.9),
            DecisionMaker::new("Mark Thompson", "CFO", 0.8),
        ]
    }
}

impl Agent for AccountIntelligenceAgent {
    fn name(&self) -> &str {
        &self.name
    }
}

impl AccountEnricher for AccountIntelligenceAgent {
    fn enrich(&self, account_id: &str) -> AgentResult<AccountProfile> {
        self.validate_input(account_id)?;

        Ok(AccountProfile {
            company_id: account_id.to_string(),
            company_name: display_name(account_id),
            industry: self.industry.clone(),
            revenue_bracket: REVENUE_BRACKET.to_string(),
            employee_count: EMPLOYEE_COUNT,
            financial_health_score: FINANCIAL_HEALTH,
            intent_score: INTENT_SCORE,
            decision_makers: Self::decision_makers(),
            pain_points: PAIN_POINTS.iter().map(|p| p.to_string()).collect(),
            competitive_context: CompetitiveContext {
                current_provider: CURRENT_PROVIDER.to_string(),
                switching_probability: SWITCHING_PROBABILITY,
            },
        })
    }
}

/// Turn `acme_mfg` into `Acme Mfg`.
///
/// Underscores become spaces. A letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise, so `3m_corp` becomes `3M Corp`.
pub fn display_name(account_id: &str) -> String {
    let mut out = String::with_capacity(account_id.len());
    let mut prev_alpha = false;

    for c in account_id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentError;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("acme_mfg"), "Acme Mfg");
        assert_eq!(display_name("precision_systems_ltd"), "Precision Systems Ltd");
        assert_eq!(display_name("ACME_MFG"), "Acme Mfg");
        assert_eq!(display_name("3m_corp"), "3M Corp");
        assert_eq!(display_name("o'neil-group"), "O'Neil-Group");
    }

    #[test]
    fn test_enrich_profile() {
        let agent = AccountIntelligenceAgent::for_industry("manufacturing");
        let profile = agent.enrich("acme_mfg").unwrap();

        assert_eq!(profile.company_id, "acme_mfg");
        assert_eq!(profile.company_name, "Acme Mfg");
        assert_eq!(profile.industry, "manufacturing");
        assert_eq!(profile.revenue_bracket, "£5M-£25M");
        assert_eq!(profile.employee_count, 150);
        assert_eq!(profile.financial_health_score, 0.78);
        assert_eq!(profile.intent_score, 0.65);
        assert_eq!(profile.primary_contact().map(|d| d.role.as_str()), Some("CEO"));
        assert_eq!(profile.decision_makers.len(), 2);
        assert_eq!(profile.competitive_context.current_provider, "Traditional Bank");
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let agent = AccountIntelligenceAgent::for_industry("manufacturing");
        assert_eq!(agent.enrich("acme_mfg"), agent.enrich("acme_mfg"));
    }

    #[test]
    fn test_enrich_rejects_blank_identifier() {
        let agent = AccountIntelligenceAgent::for_industry("manufacturing");
        assert!(matches!(agent.enrich(""), Err(AgentError::InvalidInput(_))));
        assert!(matches!(agent.enrich("  "), Err(AgentError::InvalidInput(_))));
    }
}
