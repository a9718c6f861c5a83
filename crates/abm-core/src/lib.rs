//! # ABM-Core
//!
//! Records, configuration and scoring rules shared by the account-based
//! marketing campaign simulator.

pub mod config;
pub mod error;
pub mod rules;
pub mod template;
pub mod types;

pub use config::*;
pub use error::{ConfigError, Result};
pub use rules::ScoringRules;
pub use template::*;
pub use types::*;
