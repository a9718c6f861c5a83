//! Content generation: personalised email and LinkedIn copy.

use abm_core::{AccountProfile, ContentRecord, IntentRecord};

use crate::agent::Agent;
use crate::templates::{format_email_body, format_email_subject, format_linkedin_message};

const PERSONALIZATION_SCORE: f64 = 0.85;

/// Content Generation Agent implementation
pub struct ContentGenerationAgent {
    name: String,
}

impl ContentGenerationAgent {
    pub fn new() -> Self {
        Self {
            name: "ContentGeneration".to_string(),
        }
    }

    /// Generate personalised content for an account
    pub fn generate(&self, profile: &AccountProfile, _intent: &IntentRecord) -> ContentRecord {
        let company = profile.company_name.as_str();
        let industry = profile.industry.as_str();

        ContentRecord {
            email_subject: format_email_subject(company, industry),
            email_body: format_email_body(company, industry),
            linkedin_message: format_linkedin_message(company),
            personalization_score: PERSONALIZATION_SCORE,
            compliance_approved: true,
        }
    }
}

impl Default for ContentGenerationAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for ContentGenerationAgent {
    fn name(&self) -> &str {
        &self.name
    }
}
