//! CLI subcommand implementations.

use anyhow::{bail, Result};

pub mod components;
pub mod projects;
pub mod versions;

/// Longest project key Jira accepts.
const MAX_KEY_LENGTH: usize = 255;

/// Splits a comma-separated flag value into trimmed, non-empty items.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks a project key or numeric id given on the command line.
pub fn validate_key(raw: &str) -> Result<String> {
    let key = raw.trim();
    if key.is_empty() {
        bail!("project key must not be empty");
    }
    if key.len() > MAX_KEY_LENGTH {
        bail!("project key exceeds {} characters", MAX_KEY_LENGTH);
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        bail!("invalid project key '{}': use letters, digits or '_'", key);
    }
    Ok(key.to_string())
}

/// Checks a page size for paginated endpoints (1-1000).
pub fn validate_max_results(max_results: i64) -> Result<i64> {
    if !(1..=1000).contains(&max_results) {
        bail!("max results must be between 1 and 1000, got {}", max_results);
    }
    Ok(max_results)
}
