use std::path::PathBuf;

use clap::Parser;

/// Accounts used when none are given on the command line
pub const DEMO_ACCOUNTS: [&str; 3] = [
    "techcorp_manufacturing",
    "innovative_engineering",
    "precision_systems_ltd",
];

#[derive(Parser, Debug)]
#[command(name = "abm-campaign")]
#[command(about = "Simulate an account-based marketing campaign", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Campaign configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/config.json")]
    pub config: PathBuf,

    /// Account identifiers to target
    #[arg(value_name = "ACCOUNTS")]
    pub accounts: Vec<String>,

    /// Directory holding industry templates
    #[arg(long, value_name = "DIR", default_value = "config/industry_templates")]
    pub templates_dir: PathBuf,

    /// Alternative industry template shown in the configuration summary
    #[arg(long, value_name = "NAME", default_value = "technology")]
    pub template: String,

    /// Print results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Requested accounts, or the demo set when none were given
    pub fn target_accounts(&self) -> Vec<String> {
        if self.accounts.is_empty() {
            DEMO_ACCOUNTS.iter().map(|a| a.to_string()).collect()
        } else {
            self.accounts.clone()
        }
    }
}
