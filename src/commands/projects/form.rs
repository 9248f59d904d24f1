use anyhow::Result;
use clap::Args;

use super::types::{Project, ProjectPayload};
use crate::utils::date::{input_value, parse_date, to_timestamp};
use crate::utils::form::FieldErrors;
use crate::utils::prompt_text;

#[derive(Debug, Args, Default)]
pub struct ProjectFields {
    #[clap(short = 'n', long = "name", help = "Name of the project")]
    pub name: Option<String>,
    #[clap(short = 'd', long = "description", help = "What the project is about")]
    pub description: Option<String>,
    #[clap(long = "start", help = "Start date, YYYY-MM-DD")]
    pub start: Option<String>,
    #[clap(long = "end", help = "End date, YYYY-MM-DD, empty for ongoing projects")]
    pub end: Option<String>,
    #[clap(short = 'r', long = "role", help = "Your role in the project")]
    pub role: Option<String>,
    #[clap(short = 't', long = "technologies", help = "Technologies used, separated by commas")]
    pub technologies: Option<String>,
}

impl ProjectFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.role.is_none()
            && self.technologies.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub role: String,
    pub technologies: String,
}

impl From<&Project> for ProjectForm {
    fn from(project: &Project) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            name: project.project_name.clone(),
            description: text(&project.project_description),
            start_date: input_value(project.start_date.as_deref()),
            end_date: input_value(project.end_date.as_deref()),
            role: text(&project.role_in_project),
            technologies: text(&project.technologies_used),
        }
    }
}

impl ProjectForm {
    pub fn apply(&mut self, fields: ProjectFields) {
        let fields = [
            (fields.name, &mut self.name),
            (fields.description, &mut self.description),
            (fields.start, &mut self.start_date),
            (fields.end, &mut self.end_date),
            (fields.role, &mut self.role),
            (fields.technologies, &mut self.technologies),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value.trim().to_string();
            }
        }
    }

    pub fn prompt(&mut self) -> Result<()> {
        self.name = prompt_text("Project name", &self.name)?;
        self.description = prompt_text("Description", &self.description)?;
        self.start_date = prompt_text("Start date (YYYY-MM-DD)", &self.start_date)?;
        self.end_date = prompt_text(
            "End date (YYYY-MM-DD, leave empty if ongoing)",
            &self.end_date,
        )?;
        self.role = prompt_text("Your role", &self.role)?;
        self.technologies = prompt_text("Technologies used (comma separated)", &self.technologies)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<ProjectPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("project_name", &self.name, "Project name is required");
        errors.require(
            "project_description",
            &self.description,
            "Description is required",
        );

        let start = match self.start_date.trim() {
            "" => {
                errors.push("start_date", "Start date is required");
                None
            }
            value => match parse_date(value) {
                Ok(date) => Some(date),
                Err(error) => {
                    errors.push("start_date", error.to_string());
                    None
                }
            },
        };

        let end = match self.end_date.trim() {
            "" => None,
            value => match parse_date(value) {
                Ok(date) => Some(date),
                Err(error) => {
                    errors.push("end_date", error.to_string());
                    None
                }
            },
        };

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push("end_date", "End date must be after start date");
            }
        }

        errors.require("role_in_project", &self.role, "Role is required");
        errors.require(
            "technologies_used",
            &self.technologies,
            "Technologies are required",
        );

        errors.into_result(ProjectPayload {
            project_name: self.name.trim().to_string(),
            project_description: self.description.trim().to_string(),
            start_date: start.map(to_timestamp).unwrap_or_default(),
            end_date: end.map(to_timestamp),
            role_in_project: self.role.trim().to_string(),
            technologies_used: self.technologies.trim().to_string(),
        })
    }
}
