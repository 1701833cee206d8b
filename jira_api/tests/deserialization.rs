use chrono::NaiveDate;
use jira_api::types::{
    Component, IssueTypeStatuses, Page, Project, ProjectDetail, ProjectRole, Version,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_project_list() {
    let json = load_fixture("projects.json");
    let projects: Vec<Project> = serde_json::from_str(&json).unwrap();
    assert_eq!(projects.len(), 2);

    let test = &projects[0];
    assert_eq!(test.id, "10000");
    assert_eq!(test.key, "TEST");
    assert_eq!(test.name, "Test Project");
    assert_eq!(test.project_type_key.as_deref(), Some("software"));
    assert_eq!(test.avatar_urls.len(), 4);
    assert!(test.avatar_urls.contains_key("48x48"));
    assert_eq!(test.project_category.as_ref().unwrap().name, "FIRST");

    let ops = &projects[1];
    assert_eq!(ops.key, "OPS");
    assert!(ops.project_category.is_none());
}

#[test]
fn deserialize_project_detail() {
    let json = load_fixture("project.json");
    let project: ProjectDetail = serde_json::from_str(&json).unwrap();
    assert_eq!(project.key, "TEST");
    assert_eq!(
        project.description.as_deref(),
        Some("Project used for integration testing")
    );

    let lead = project.lead.as_ref().unwrap();
    assert_eq!(lead.display_name, "Jane Smith");
    assert_eq!(lead.name.as_deref(), Some("jsmith"));
    assert!(lead.account_id.is_none());
    assert!(lead.active);

    assert_eq!(project.components.len(), 1);
    assert_eq!(project.components[0].name, "Backend");
    assert_eq!(project.issue_types.len(), 2);
    assert!(project.issue_types[1].subtask);
    assert_eq!(project.assignee_type.as_deref(), Some("UNASSIGNED"));
    assert_eq!(project.versions[0].release_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(project.roles.len(), 2);
    assert!(project.roles.contains_key("Administrators"));
    assert_eq!(project.project_keys, vec!["TEST", "OLDTEST"]);
}

#[test]
fn deserialize_project_detail_minimal() {
    let json = r#"{
        "self": "https://jira.example.com/rest/api/2/project/10000",
        "id": "10000",
        "key": "TEST",
        "name": "Test Project"
    }"#;
    let project: ProjectDetail = serde_json::from_str(json).unwrap();
    assert!(project.lead.is_none());
    assert!(project.components.is_empty());
    assert!(project.versions.is_empty());
    assert!(project.roles.is_empty());
    assert!(project.project_keys.is_empty());
}

#[test]
fn deserialize_versions_page() {
    let json = load_fixture("versions_page.json");
    let page: Page<Version> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.start_at, 0);
    assert_eq!(page.max_results, 2);
    assert_eq!(page.total, 3);
    assert!(!page.is_last);
    assert!(page.next_page.is_some());
    assert_eq!(page.values.len(), 2);

    let released = &page.values[0];
    assert!(released.released);
    assert!(released.start_date.is_none());
    assert!(released.overdue.is_none());

    let upcoming = &page.values[1];
    assert_eq!(upcoming.name, "1.1");
    assert!(!upcoming.released);
    assert_eq!(upcoming.start_date, NaiveDate::from_ymd_opt(2024, 3, 2));
    assert_eq!(upcoming.overdue, Some(true));
    assert_eq!(upcoming.project_id, Some(10000));
}

#[test]
fn deserialize_components() {
    let json = load_fixture("components.json");
    let components: Vec<Component> = serde_json::from_str(&json).unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0].lead.as_ref().unwrap().display_name, "Jane Smith");
    assert_eq!(components[0].assignee_type.as_deref(), Some("COMPONENT_LEAD"));
    assert!(components[1].lead.is_none());
    assert!(components[1].description.is_none());
    assert_eq!(components[1].project.as_deref(), Some("TEST"));
}

#[test]
fn deserialize_statuses() {
    let json = load_fixture("statuses.json");
    let statuses: Vec<IssueTypeStatuses> = serde_json::from_str(&json).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].name, "Task");
    let names: Vec<&str> = statuses[0].statuses.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["To Do", "Done"]);
}

#[test]
fn deserialize_role() {
    let json = load_fixture("role.json");
    let role: ProjectRole = serde_json::from_str(&json).unwrap();
    assert_eq!(role.id, 10002);
    assert_eq!(role.name, "Administrators");
    assert_eq!(role.actors.len(), 2);
    assert_eq!(role.actors[0].actor_type, "atlassian-group-role-actor");
    assert_eq!(role.actors[1].name.as_deref(), Some("jsmith"));
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"[{"key": not valid json}]"#;
    let result = serde_json::from_str::<Vec<Project>>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"[{"id": "10000", "name": "No key"}]"#;
    let result = serde_json::from_str::<Vec<Project>>(json);
    assert!(result.is_err());
}
