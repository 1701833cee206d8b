mod commands;
mod output;

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use jira_api::{JiraClient, JiraConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "jira")]
#[command(about = "Query project data from a Jira instance")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Jira instance URL, e.g. https://jira.example.com (default: $JIRA_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// REST API version (default: $JIRA_API_VERSION, then 2)
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects, or show one project
    Projects(commands::projects::ProjectsArgs),
    /// List a project's versions, one page at a time
    Versions(commands::versions::VersionsArgs),
    /// List a project's components
    Components(commands::components::ComponentsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("jira=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = JiraClient::new(build_config(&cli)?)?;

    match &cli.command {
        Commands::Projects(args) => commands::projects::run(args, &client, &format).await?,
        Commands::Versions(args) => commands::versions::run(args, &client, &format).await?,
        Commands::Components(args) => commands::components::run(args, &client, &format).await?,
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<JiraConfig> {
    let url = cli
        .url
        .clone()
        .or_else(|| std::env::var("JIRA_URL").ok())
        .ok_or_else(|| anyhow!("no Jira URL: pass --url or set JIRA_URL"))?;

    let mut config =
        JiraConfig::from_url(&url)?.with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(version) = cli
        .api_version
        .clone()
        .or_else(|| std::env::var("JIRA_API_VERSION").ok())
    {
        config = config.with_api_version(&version);
    }
    Ok(config)
}
