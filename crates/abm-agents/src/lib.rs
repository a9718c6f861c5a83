//! # ABM-Agents
//!
//! Simulated agents for an account-based marketing campaign.
//!
//! ## Architecture
//!
//! Three agents run in sequence for every target account:
//!
//! 1. **Account Intelligence**: identifier → enriched account profile
//! 2. **Intent Detection**: profile → buying signals and timing
//! 3. **Content Generation**: profile + intent → personalised outreach copy
//!
//! ## Agent Flow
//!
//! ```text
//! account id
//!     ↓
//! [Agent 1: Account Intelligence]   (may fail: account skipped)
//!     ↓
//! [Agent 2: Intent Detection]
//!     ↓
//! [Agent 3: Content Generation]
//!     ↓
//! engagement score → pipeline value → campaign totals
//! ```

pub mod agent;
pub mod content;
pub mod intelligence;
pub mod intent;
pub mod observer;
pub mod orchestrator;
pub mod scoring;
pub mod templates;

pub use agent::*;
pub use content::*;
pub use intelligence::*;
pub use intent::*;
pub use observer::*;
pub use orchestrator::*;
pub use scoring::*;
