use serde::{Deserialize, Serialize};

pub const DEPARTMENTS: [&str; 6] = ["Engineering", "Product", "Marketing", "Sales", "HR", "Finance"];

/// Employee record as the backend returns it, both for `/employees/me` and
/// the admin listing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Employee {
    pub id: u64,
    pub employee_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub date_of_joining: Option<String>,
    #[serde(default)]
    pub current_department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub current_project: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
}

/// Body of the profile and admin edit forms. Every text field is sent, the
/// joining date only when set and the current project only by admins.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct EmployeeUpdate {
    pub name: String,
    pub current_department: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,
    pub phone: String,
    pub address: String,
    pub skills: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_joining: Option<String>,
}

/// Whatever the upload endpoint reports back, all of it optional.
#[derive(Debug, Deserialize, Default)]
pub struct UploadSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub updated: Option<u64>,
}
