//! jira-transit - CI step entry point
//!
//! Reads its inputs from the CI environment (or flags for local runs),
//! loads the push event payload, and drives one orchestrator run.

use clap::Parser;
use jira_transit::config::Config;
use jira_transit::event::PushEvent;
use jira_transit::orchestrator::Orchestrator;
use jira_transit::TransitError;
use std::process;

/// Transition Jira issues referenced in pushed commit messages
#[derive(Parser, Debug)]
#[command(name = "jira-transit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Jira instance base URL
    #[arg(long, env = "JIRA_BASE_URL")]
    base_url: Option<String>,

    /// Credential sent verbatim as the Basic Authorization header value
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    api_token: Option<String>,

    /// Comma-separated issue type names allowed to transition
    #[arg(long, env = "INPUT_ISSUETYPES")]
    issuetypes: Option<String>,

    /// Comma-separated target status names, positionally paired with --issuetypes
    #[arg(long, env = "INPUT_TRANSITIONS")]
    transitions: Option<String>,

    /// Path to the push event JSON payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = jira_transit::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> jira_transit::Result<()> {
    // Inputs are validated before the event file is touched
    let config = Config::from_parts(cli.base_url, cli.api_token, cli.issuetypes, cli.transitions)?;

    let event_path = cli
        .event_path
        .ok_or_else(|| TransitError::Config("GITHUB_EVENT_PATH is not set".to_string()))?;
    let event = PushEvent::load(&event_path)?;

    let orchestrator = Orchestrator::new(config)?;
    let summary = orchestrator.run(&event).await?;

    tracing::info!(
        applied = summary.applied.len(),
        already_in_target = summary.already_in_target,
        "Run complete"
    );

    Ok(())
}
