use anyhow::Result;
use clap::Args;
use jira_api::types::{Project, ProjectDetail};
use jira_api::{CallOptions, JiraClient};

use super::{parse_list, validate_key};
use crate::output::{
    build_project_detail_rows, build_project_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct ProjectsArgs {
    /// Show a single project by key or id
    #[arg(long)]
    pub key: Option<String>,

    /// Comma-separated fields to return (with --key)
    #[arg(long)]
    pub fields: Option<String>,

    /// Comma-separated properties to expand, e.g. description,lead,projectKeys (with --key)
    #[arg(long)]
    pub expand: Option<String>,
}

pub async fn run(args: &ProjectsArgs, client: &JiraClient, format: &OutputFormat) -> Result<()> {
    if let Some(key) = &args.key {
        let mut opts = CallOptions::new(&validate_key(key)?);
        if let Some(fields) = &args.fields {
            opts = opts.with_fields(&parse_list(fields));
        }
        if let Some(expand) = &args.expand {
            opts = opts.with_expands(&parse_list(expand));
        }

        let value = client.project().get_project(&opts).await?;
        if let OutputFormat::Json = format {
            print_json(&value);
            return Ok(());
        }
        let project: ProjectDetail = serde_json::from_value(value)?;
        return print_rows(build_project_detail_rows(&[project]), format);
    }

    if args.fields.is_some() || args.expand.is_some() {
        eprintln!("Note: --fields and --expand only apply with --key.");
    }

    let value = client.project().get_all_projects().await?;
    if let OutputFormat::Json = format {
        print_json(&value);
        return Ok(());
    }
    let projects: Vec<Project> = serde_json::from_value(value)?;
    eprintln!("{} projects", projects.len());
    print_rows(build_project_rows(&projects), format)
}
