use std::io::Write;

use anyhow::{anyhow, Result};
use reqwest::Method;
use tabwriter::TabWriter;

use super::types::{Project, ProjectPayload};
use crate::state::http::{HttpClient, RequestBody};
use crate::utils::date::{format_long, parse_date};

pub async fn get_my_projects(http: &HttpClient) -> Result<Vec<Project>> {
    let projects = http
        .request::<Vec<Project>>(Method::GET, "/employees/me/projects", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(projects)
}

pub async fn get_project(http: &HttpClient, id: u64) -> Result<Project> {
    get_my_projects(http)
        .await?
        .into_iter()
        .find(|project| project.id == id)
        .ok_or_else(|| anyhow!("Project `{id}` not found"))
}

pub async fn create_project(http: &HttpClient, payload: &ProjectPayload) -> Result<Project> {
    let project = http
        .request::<Project>(
            Method::POST,
            "/employees/me/projects",
            Some(RequestBody::json(payload)?),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(project)
}

pub async fn update_project(
    http: &HttpClient,
    id: u64,
    payload: &ProjectPayload,
) -> Result<Option<Project>> {
    let project = http
        .request::<Project>(
            Method::PUT,
            &format!("/employees/me/projects/{id}"),
            Some(RequestBody::json(payload)?),
        )
        .await?;

    Ok(project)
}

pub async fn delete_project(http: &HttpClient, id: u64) -> Result<()> {
    http.send(
        Method::DELETE,
        &format!("/employees/me/projects/{id}"),
        None,
        None,
    )
    .await?;

    Ok(())
}

/// `January 5, 2024 - Present`
pub fn format_period(project: &Project) -> String {
    let date = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(|value| parse_date(value).ok())
            .map(format_long)
    };

    format!(
        "{} - {}",
        date(&project.start_date).unwrap_or_else(|| "?".to_string()),
        date(&project.end_date).unwrap_or_else(|| "Present".to_string())
    )
}

pub fn format_projects(projects: &[Project], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(tw, "ID\tNAME\tROLE\tPERIOD\tTECHNOLOGIES").unwrap();
    }

    for project in projects {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}",
            project.id,
            project.project_name,
            project.role_in_project.as_deref().unwrap_or("-"),
            format_period(project),
            project.technologies_used.as_deref().unwrap_or("-"),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_project(project: &Project) -> String {
    format_projects(&[project.clone()], false)[0].clone()
}
