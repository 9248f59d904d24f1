use anyhow::{anyhow, Result};
use console::style;
use reqwest::Method;

use crate::commands::employees::types::{Employee, EmployeeUpdate};
use crate::state::http::{ApiError, HttpClient, RequestBody};
use crate::utils::date::{format_long, parse_date};
use crate::utils::or_not_provided;

pub async fn get_my_profile(http: &HttpClient) -> Result<Employee> {
    let profile = http
        .request::<Employee>(Method::GET, "/employees/me", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(profile)
}

pub async fn update_my_profile(
    http: &HttpClient,
    update: &EmployeeUpdate,
) -> Result<Option<Employee>> {
    let profile = http
        .request::<Employee>(Method::PUT, "/employees/me", Some(RequestBody::json(update)?))
        .await?;

    Ok(profile)
}

/// A 404 on the profile means no employee record is linked to the account yet.
pub fn explain_missing_profile(error: anyhow::Error) -> anyhow::Error {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) if api_error.is_not_found() => anyhow!(
            "Your employee profile is not set up yet. Please contact an administrator."
        ),
        _ => error,
    }
}

/// Comma separated skills, trimmed, blanks dropped.
pub fn split_skills(skills: Option<&str>) -> Vec<String> {
    skills
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_profile(profile: &Employee) -> Vec<String> {
    let joined = profile
        .date_of_joining
        .as_deref()
        .and_then(|value| parse_date(value).ok())
        .map(format_long);

    let skills = split_skills(profile.skills.as_deref());

    vec![
        style("Personal information").bold().to_string(),
        format!("  Name: {}", profile.name),
        format!("  Email: {}", profile.email),
        format!("  Phone: {}", or_not_provided(profile.phone.as_deref())),
        format!("  Address: {}", or_not_provided(profile.address.as_deref())),
        String::new(),
        style("Work information").bold().to_string(),
        format!("  Employee ID: {}", profile.employee_id),
        format!(
            "  Department: {}",
            or_not_provided(profile.current_department.as_deref())
        ),
        format!("  Role: {}", or_not_provided(profile.role.as_deref())),
        format!(
            "  Current project: {}",
            or_not_provided(profile.current_project.as_deref())
        ),
        format!("  Joined: {}", or_not_provided(joined.as_deref())),
        format!(
            "  Skills: {}",
            if skills.is_empty() {
                "Not provided".to_string()
            } else {
                skills.join(", ")
            }
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::http::testing::{route, MockServer};
    use crate::state::http::Credential;

    const PROFILE: &str = r#"{"id":3,"employee_id":"E003","name":"Jane Doe","email":"jane@corp.io","date_of_joining":"2024-01-05T00:00:00","current_department":"Engineering","role":"Developer","phone":"","address":null,"skills":"Rust, SQL ,, Go "}"#;

    fn client(server: &MockServer) -> HttpClient {
        HttpClient::new(
            Credential::ephemeral(Some("jane".to_string())),
            Some(server.url.clone()),
        )
        .unwrap()
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills(Some("Rust, SQL ,, Go ")),
            vec!["Rust", "SQL", "Go"]
        );
        assert!(split_skills(None).is_empty());
        assert!(split_skills(Some(" , ")).is_empty());
    }

    #[test]
    fn test_format_profile() {
        let profile: Employee = serde_json::from_str(PROFILE).unwrap();
        let lines = format_profile(&profile);

        assert!(lines.contains(&"  Phone: Not provided".to_string()));
        assert!(lines.contains(&"  Address: Not provided".to_string()));
        assert!(lines.contains(&"  Joined: January 5, 2024".to_string()));
        assert!(lines.contains(&"  Skills: Rust, SQL, Go".to_string()));
        assert!(lines.contains(&"  Current project: Not provided".to_string()));
    }

    #[tokio::test]
    async fn test_missing_profile_is_explained() {
        let server = MockServer::start(vec![route(
            "GET",
            "/employees/me",
            404,
            r#"{"detail":"Employee not found"}"#,
        )])
        .await;

        let error = get_my_profile(&client(&server))
            .await
            .map_err(explain_missing_profile)
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Your employee profile is not set up yet. Please contact an administrator."
        );
    }

    #[tokio::test]
    async fn test_other_errors_pass_through() {
        let server = MockServer::start(vec![route(
            "GET",
            "/employees/me",
            500,
            r#"{"detail":"db down"}"#,
        )])
        .await;

        let error = get_my_profile(&client(&server))
            .await
            .map_err(explain_missing_profile)
            .unwrap_err();

        assert_eq!(error.to_string(), "db down");
    }

    #[tokio::test]
    async fn test_update_profile_body() {
        let server = MockServer::start(vec![route("PUT", "/employees/me", 200, PROFILE)]).await;

        let update = EmployeeUpdate {
            name: "Jane Doe".to_string(),
            current_department: "HR".to_string(),
            ..Default::default()
        };

        update_my_profile(&client(&server), &update).await.unwrap();

        let body: serde_json::Value =
            serde_json::from_slice(&server.requests()[0].body).unwrap();
        assert_eq!(body["current_department"], "HR");
        assert!(body.get("current_project").is_none());
    }
}
