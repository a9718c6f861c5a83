//! Base agent traits and common types.

use abm_core::AccountProfile;

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Agent error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AgentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Enrichment failed for {account_id}: {reason}")]
    Enrichment { account_id: String, reason: String },
}

/// Base trait for all agents
pub trait Agent {
    /// Agent name/identifier
    fn name(&self) -> &str;

    /// Optional: validate input before processing
    fn validate_input(&self, input: &str) -> AgentResult<()> {
        if input.trim().is_empty() {
            Err(AgentError::InvalidInput("Empty input".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Source of account intelligence.
///
/// Enrichment is the only fallible step of the pipeline; a failure here
/// skips the account without aborting the campaign.
pub trait AccountEnricher: Agent {
    fn enrich(&self, account_id: &str) -> AgentResult<AccountProfile>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named;

    impl Agent for Named {
        fn name(&self) -> &str {
            "Named"
        }
    }

    #[test]
    fn test_validate_input_rejects_blank() {
        let agent = Named;
        assert!(agent.validate_input("acme_mfg").is_ok());
        assert_eq!(
            agent.validate_input("   "),
            Err(AgentError::InvalidInput("Empty input".to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = AgentError::Enrichment {
            account_id: "acme_mfg".to_string(),
            reason: "registry offline".to_string(),
        };
        assert_eq!(err.to_string(), "Enrichment failed for acme_mfg: registry offline");
    }
}
