use serde::{Deserialize, Serialize};

/// A project on the signed in employee's history.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub project_name: String,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub role_in_project: Option<String>,
    #[serde(default)]
    pub technologies_used: Option<String>,
}

/// Create and update body. `end_date` is always sent, `null` for ongoing
/// projects.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ProjectPayload {
    pub project_name: String,
    pub project_description: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub role_in_project: String,
    pub technologies_used: String,
}
