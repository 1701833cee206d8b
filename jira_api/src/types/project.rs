//! Project-related types returned by the API.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric project identifier, sent by the server as a string (e.g. "10000").
pub type ProjectID = String;

/// Avatar URLs keyed by size, e.g. `"48x48"`.
pub type AvatarUrls = BTreeMap<String, String>;

/// Summary representation of a project, as listed by `GET /project`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    expand: Option<String>,

    /// Canonical REST URL of this project.
    #[serde(rename = "self")]
    pub self_url: String,

    pub id: ProjectID,

    /// Project key (e.g. "TEST"), the prefix of its issue keys.
    pub key: String,

    pub name: String,

    #[serde(default)]
    pub avatar_urls: AvatarUrls,

    pub project_category: Option<ProjectCategory>,

    /// `software`, `business` or `service_desk`.
    pub project_type_key: Option<String>,
}

/// Full project record returned by `GET /project/{idOrKey}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    expand: Option<String>,

    #[serde(rename = "self")]
    pub self_url: String,

    pub id: ProjectID,

    pub key: String,

    pub name: String,

    pub description: Option<String>,

    /// Project lead.
    pub lead: Option<User>,

    #[serde(default)]
    pub components: Vec<Component>,

    #[serde(default)]
    pub issue_types: Vec<IssueType>,

    pub url: Option<String>,

    email: Option<String>,

    /// Default assignee policy, e.g. `PROJECT_LEAD` or `UNASSIGNED`.
    pub assignee_type: Option<String>,

    #[serde(default)]
    pub versions: Vec<Version>,

    /// Role name to role URL.
    #[serde(default)]
    pub roles: BTreeMap<String, String>,

    #[serde(default)]
    pub avatar_urls: AvatarUrls,

    pub project_category: Option<ProjectCategory>,

    pub project_type_key: Option<String>,

    /// Every key the project has had. Only present with `expand=projectKeys`.
    #[serde(default)]
    pub project_keys: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectCategory {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A Jira user as embedded in project payloads.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "self")]
    pub self_url: Option<String>,
    /// Username on Server/Data Center instances.
    pub name: Option<String>,
    /// Opaque account id on Cloud instances.
    pub account_id: Option<String>,
    pub display_name: String,
    #[serde(default)]
    pub active: bool,
}

/// A project component, from `GET /project/{key}/components`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub lead: Option<User>,
    pub assignee_type: Option<String>,
    is_assignee_type_valid: Option<bool>,
    /// Key of the owning project.
    pub project: Option<String>,
    pub project_id: Option<i64>,
}

/// A project version, from `GET /project/{key}/versions`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub released: bool,
    pub start_date: Option<NaiveDate>,
    pub release_date: Option<NaiveDate>,
    /// Set by the server only for unreleased versions.
    pub overdue: Option<bool>,
    user_release_date: Option<String>,
    pub project_id: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    icon_url: Option<String>,
    #[serde(default)]
    pub subtask: bool,
}

/// An issue type together with the statuses it can take, from
/// `GET /project/{key}/statuses`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeStatuses {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
    pub statuses: Vec<Status>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(rename = "self")]
    pub self_url: String,
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    icon_url: Option<String>,
}

/// A project role with its members, from `GET /project/{key}/role/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectRole {
    #[serde(rename = "self")]
    pub self_url: String,
    pub name: String,
    pub id: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub actors: Vec<RoleActor>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleActor {
    pub id: i64,
    pub display_name: String,
    /// `atlassian-user-role-actor` or `atlassian-group-role-actor`.
    #[serde(rename = "type")]
    pub actor_type: String,
    pub name: Option<String>,
}
