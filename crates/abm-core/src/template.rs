//! Industry-specific messaging templates.
//!
//! Templates live next to the main configuration as `<industry>.json` and
//! are only used for display. A missing template is not an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryTemplate {
    pub characteristics: IndustryCharacteristics,
    /// Messaging themes, most important first
    #[serde(default)]
    pub content_themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryCharacteristics {
    pub decision_cycle: String,
    pub communication_style: String,
}

impl IndustryTemplate {
    /// Load `<dir>/<industry>.json`, returning `None` when it does not exist
    pub fn load(dir: impl AsRef<Path>, industry: &str) -> Result<Option<Self>> {
        let path = dir.as_ref().join(format!("{industry}.json"));

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        let template = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Some(template))
    }

    /// First `n` content themes
    pub fn top_themes(&self, n: usize) -> &[String] {
        &self.content_themes[..n.min(self.content_themes.len())]
    }
}
