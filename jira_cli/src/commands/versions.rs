use anyhow::Result;
use clap::Args;
use jira_api::types::{Page, Version};
use jira_api::{CallOptions, JiraClient, VersionOrderBy, VersionPage};

use super::{validate_key, validate_max_results};
use crate::output::{build_version_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct VersionsArgs {
    /// Project key or id
    #[arg(long)]
    pub key: String,

    /// Index of the first version to return
    #[arg(long, default_value = "0")]
    pub start_at: i64,

    /// Versions per page
    #[arg(long, default_value = "50")]
    pub max_results: i64,

    /// Sort field: sequence, name, start-date, release-date
    #[arg(long, default_value = "sequence")]
    pub order_by: String,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

pub async fn run(args: &VersionsArgs, client: &JiraClient, format: &OutputFormat) -> Result<()> {
    let opts = CallOptions::new(&validate_key(&args.key)?);

    let order_by = match args.order_by.as_str() {
        "name" => VersionOrderBy::Name,
        "start-date" => VersionOrderBy::StartDate,
        "release-date" => VersionOrderBy::ReleaseDate,
        _ => VersionOrderBy::Sequence,
    };
    let page = VersionPage::default()
        .with_start_at(args.start_at.max(0))
        .with_max_results(validate_max_results(args.max_results)?)
        .with_order_by(order_by)
        .with_descending(args.desc);

    let value = client
        .project()
        .get_versions_paginated(&opts, &page)
        .await?;
    if let OutputFormat::Json = format {
        print_json(&value);
        return Ok(());
    }

    let resp: Page<Version> = serde_json::from_value(value)?;
    eprintln!("{}", page_summary(resp.start_at, resp.values.len(), resp.total));
    print_rows(build_version_rows(&resp.values), format)
}

fn page_summary(start_at: i64, shown: usize, total: i64) -> String {
    if shown == 0 {
        return "No versions".to_string();
    }
    format!("Versions {}-{} of {}", start_at + 1, start_at + shown as i64, total)
}
