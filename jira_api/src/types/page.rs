use serde::{Deserialize, Serialize};

/// Offset-paginated result, as returned by `/project/{key}/version`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(rename = "self")]
    self_url: Option<String>,
    pub next_page: Option<String>,
    pub max_results: i64,
    pub start_at: i64,
    pub total: i64,
    pub is_last: bool,
    pub values: Vec<T>,
}
