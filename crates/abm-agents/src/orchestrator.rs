//! Campaign orchestrator coordinating the three-agent pipeline.

use abm_core::{AccountMetrics, AccountOutcome, CampaignConfig, CampaignResults};

use crate::agent::{AccountEnricher, Agent, AgentResult};
use crate::content::ContentGenerationAgent;
use crate::intelligence::AccountIntelligenceAgent;
use crate::intent::IntentDetectionAgent;
use crate::observer::{CampaignObserver, TracingObserver};
use crate::scoring::{engagement_score, pipeline_value};

/// Drives enrichment, intent analysis and content generation for each
/// account in turn and aggregates the simulated campaign metrics.
pub struct CampaignOrchestrator {
    config: CampaignConfig,
    enricher: Box<dyn AccountEnricher>,
    intent: IntentDetectionAgent,
    content: ContentGenerationAgent,
    observer: Box<dyn CampaignObserver>,
}

impl CampaignOrchestrator {
    pub fn new(config: CampaignConfig) -> Self {
        let enricher = AccountIntelligenceAgent::new(&config);
        Self {
            config,
            enricher: Box::new(enricher),
            intent: IntentDetectionAgent::new(),
            content: ContentGenerationAgent::new(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the account intelligence source
    pub fn with_enricher(mut self, enricher: impl AccountEnricher + 'static) -> Self {
        self.enricher = Box::new(enricher);
        self
    }

    /// Replace the progress observer
    pub fn with_observer(mut self, observer: impl CampaignObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    /// Execute the campaign over `account_ids` in order.
    ///
    /// Never fails as a whole: an account whose enrichment fails is
    /// recorded as a failed outcome and excluded from every aggregate
    /// except `total_accounts`.
    pub fn run_campaign<S: AsRef<str>>(&self, account_ids: &[S]) -> CampaignResults {
        self.observer.campaign_started(account_ids.len());

        let mut total_touchpoints: u32 = 0;
        let mut engagement_scores = Vec::with_capacity(account_ids.len());
        let mut predicted_pipeline = 0.0;
        let mut account_outcomes = Vec::with_capacity(account_ids.len());

        for account_id in account_ids {
            let account_id = account_id.as_ref();

            match self.process_account(account_id) {
                Ok(metrics) => {
                    total_touchpoints = total_touchpoints.saturating_add(metrics.touchpoints);
                    engagement_scores.push(metrics.engagement_score);
                    predicted_pipeline += metrics.pipeline_value;

                    self.observer.account_processed(account_id, &metrics);
                    account_outcomes.push(AccountOutcome::processed(account_id, metrics));
                }
                Err(e) => {
                    self.observer.account_failed(account_id, &e);
                    account_outcomes.push(AccountOutcome::failed(account_id, e.to_string()));
                }
            }
        }

        let engagement_rate = if engagement_scores.is_empty() {
            0.0
        } else {
            engagement_scores.iter().sum::<f64>() / engagement_scores.len() as f64
        };

        let results = CampaignResults {
            total_accounts: account_ids.len(),
            total_touchpoints,
            engagement_rate,
            predicted_pipeline,
            performance_by_channel: self.config.scoring.channel_performance.clone(),
            account_outcomes,
        };

        self.observer.campaign_completed(&results);
        results
    }

    fn process_account(&self, account_id: &str) -> AgentResult<AccountMetrics> {
        let rules = &self.config.scoring;

        // Step 1: Enrich account intelligence
        self.observer.agent_invoked(self.enricher.name(), account_id);
        let profile = self.enricher.enrich(account_id)?;

        // Step 2: Detect intent and timing
        self.observer.agent_invoked(self.intent.name(), account_id);
        let intent = self.intent.analyze(&profile);

        // Step 3: Generate personalised content
        self.observer.agent_invoked(self.content.name(), account_id);
        let content = self.content.generate(&profile, &intent);

        // Step 4: Expected performance
        let engagement = engagement_score(rules, &profile, &content);

        Ok(AccountMetrics {
            touchpoints: self.config.touchpoints_per_account(),
            engagement_score: engagement,
            pipeline_value: pipeline_value(rules, &profile, engagement),
        })
    }
}
