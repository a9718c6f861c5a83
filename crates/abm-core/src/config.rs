//! Campaign configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::rules::ScoringRules;

/// Top-level keys every configuration document must carry
pub const REQUIRED_KEYS: [&str; 3] = ["target_market", "ai_models", "channels"];

/// Complete campaign configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Market the campaign is aimed at
    pub target_market: TargetMarket,

    /// Model settings; any JSON value, opaque to the simulator
    pub ai_models: Value,

    /// Outreach channels
    pub channels: ChannelConfig,

    /// Scoring constants, defaulted when absent
    #[serde(default)]
    pub scoring: ScoringRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetMarket {
    /// Industry label used in profiles and messaging
    pub industry: String,

    /// Roles the campaign addresses
    #[serde(default)]
    pub decision_makers: Vec<String>,

    /// Any other market attributes (geography, company size, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channels used for the multi-touch sequence
    pub primary: Vec<String>,

    #[serde(default)]
    pub secondary: Vec<String>,
}

impl CampaignConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_value(value)
    }

    /// Validate and type an already-parsed document
    pub fn from_value(value: Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ConfigError::MissingKey(REQUIRED_KEYS[0].to_string()))?;

        if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(ConfigError::MissingKey(missing.to_string()));
        }

        let config: CampaignConfig = serde_json::from_value(value)?;
        config.scoring.validate()?;

        Ok(config)
    }

    /// Touchpoints generated for one account
    pub fn touchpoints_per_account(&self) -> u32 {
        let channels = u32::try_from(self.channels.primary.len()).unwrap_or(u32::MAX);
        channels.saturating_mul(self.scoring.touches_per_channel)
    }
}
