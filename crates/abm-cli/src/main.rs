use anyhow::{Context as _, Result};
use clap::Parser as _;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use abm_agents::CampaignOrchestrator;
use abm_core::{CampaignConfig, IndustryTemplate};

mod cli;
mod report;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let output = run(&cli)?;
    println!("{output}");

    Ok(())
}

/// Load the configuration, run the campaign and render the output.
///
/// A configuration failure aborts before any campaign work is done.
fn run(cli: &Cli) -> Result<String> {
    tracing::info!("Initializing ABM Agent with config: {}", cli.config.display());
    let config = CampaignConfig::from_file(&cli.config)
        .inspect_err(|e| tracing::error!("Failed to load configuration: {}", e))
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let orchestrator = CampaignOrchestrator::new(config);
    tracing::info!("ABM Agent initialized successfully");

    let accounts = cli.target_accounts();
    let results = orchestrator.run_campaign(accounts.as_slice());

    if cli.json {
        return serde_json::to_string_pretty(&results).context("serializing results");
    }

    let template = match IndustryTemplate::load(&cli.templates_dir, &cli.template) {
        Ok(template) => template,
        Err(e) => {
            tracing::warn!("Ignoring industry template {}: {}", cli.template, e);
            None
        }
    };

    Ok([
        "🚀 ABM AI Agent - Campaign Simulation".to_string(),
        "=".repeat(50),
        report::render_results(&results),
        String::new(),
        report::render_config_summary(orchestrator.config(), &cli.template, template.as_ref()),
    ]
    .join("\n"))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
