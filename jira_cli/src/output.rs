use anyhow::Result;
use jira_api::types::{Component, Project, ProjectDetail, Version};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct ProjectRow {
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
}

#[derive(Tabled, Serialize)]
pub struct ProjectDetailRow {
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Lead")]
    #[serde(rename = "Lead")]
    lead: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Components")]
    #[serde(rename = "Components")]
    components: usize,
    #[tabled(rename = "Versions")]
    #[serde(rename = "Versions")]
    versions: usize,
}

#[derive(Tabled, Serialize)]
pub struct VersionRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Start")]
    #[serde(rename = "Start")]
    start_date: String,
    #[tabled(rename = "Release")]
    #[serde(rename = "Release")]
    release_date: String,
}

#[derive(Tabled, Serialize)]
pub struct ComponentRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Lead")]
    #[serde(rename = "Lead")]
    lead: String,
    #[tabled(rename = "Assignee")]
    #[serde(rename = "Assignee")]
    assignee_type: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

// -- Row builders --

pub fn build_project_rows(projects: &[Project]) -> Vec<ProjectRow> {
    projects
        .iter()
        .map(|p| ProjectRow {
            key: p.key.clone(),
            name: p.name.clone(),
            project_type: p.project_type_key.clone().unwrap_or_default(),
            category: p
                .project_category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_project_detail_rows(projects: &[ProjectDetail]) -> Vec<ProjectDetailRow> {
    projects
        .iter()
        .map(|p| ProjectDetailRow {
            key: p.key.clone(),
            name: p.name.clone(),
            lead: p
                .lead
                .as_ref()
                .map(|l| l.display_name.clone())
                .unwrap_or_default(),
            project_type: p.project_type_key.clone().unwrap_or_default(),
            components: p.components.len(),
            versions: p.versions.len(),
        })
        .collect()
}

pub fn build_version_rows(versions: &[Version]) -> Vec<VersionRow> {
    versions
        .iter()
        .map(|v| VersionRow {
            name: v.name.clone(),
            status: version_status(v).to_string(),
            start_date: v.start_date.map(|d| d.to_string()).unwrap_or_default(),
            release_date: v.release_date.map(|d| d.to_string()).unwrap_or_default(),
        })
        .collect()
}

pub fn build_component_rows(components: &[Component]) -> Vec<ComponentRow> {
    components
        .iter()
        .map(|c| ComponentRow {
            name: c.name.clone(),
            lead: c
                .lead
                .as_ref()
                .map(|l| l.display_name.clone())
                .unwrap_or_default(),
            assignee_type: c.assignee_type.clone().unwrap_or_default(),
            description: c.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn version_status(version: &Version) -> &'static str {
    if version.archived {
        "archived"
    } else if version.released {
        "released"
    } else if version.overdue == Some(true) {
        "overdue"
    } else {
        "unreleased"
    }
}

// -- Rendering --

/// Prints rows as a table, Markdown table or CSV. JSON output bypasses rows
/// and goes through [`print_json`] with the raw response.
pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
