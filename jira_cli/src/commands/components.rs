use anyhow::Result;
use clap::Args;
use jira_api::types::Component;
use jira_api::{CallOptions, JiraClient};

use super::validate_key;
use crate::output::{build_component_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct ComponentsArgs {
    /// Project key or id
    #[arg(long)]
    pub key: String,
}

pub async fn run(args: &ComponentsArgs, client: &JiraClient, format: &OutputFormat) -> Result<()> {
    let opts = CallOptions::new(&validate_key(&args.key)?);
    let value = client.project().get_components(&opts).await?;
    if let OutputFormat::Json = format {
        print_json(&value);
        return Ok(());
    }
    let components: Vec<Component> = serde_json::from_value(value)?;
    print_rows(build_component_rows(&components), format)
}
