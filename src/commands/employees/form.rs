use anyhow::Result;
use clap::Args;

use super::types::{Employee, EmployeeUpdate, DEPARTMENTS};
use crate::utils::date::{input_value, parse_date, to_timestamp, today};
use crate::utils::form::FieldErrors;
use crate::utils::prompt_text;

/// Who is filling in the form, admins may set the current project and any
/// department name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Editor {
    SelfService,
    Admin,
}

#[derive(Debug, Args, Default)]
pub struct FieldOptions {
    #[clap(long = "name", help = "Full name")]
    pub name: Option<String>,
    #[clap(long = "department", help = "Department")]
    pub department: Option<String>,
    #[clap(long = "role", help = "Job role")]
    pub role: Option<String>,
    #[clap(long = "project", help = "Current project (admin only)")]
    pub project: Option<String>,
    #[clap(long = "phone", help = "Phone number")]
    pub phone: Option<String>,
    #[clap(long = "address", help = "Address")]
    pub address: Option<String>,
    #[clap(long = "skills", help = "Skills, separated by commas")]
    pub skills: Option<String>,
    #[clap(long = "joined", help = "Date of joining, YYYY-MM-DD")]
    pub joined: Option<String>,
}

impl FieldOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.role.is_none()
            && self.project.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.skills.is_none()
            && self.joined.is_none()
    }
}

/// Editable employee fields as plain text, the way they sit in the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub current_department: String,
    pub role: String,
    pub current_project: String,
    pub phone: String,
    pub address: String,
    pub skills: String,
    pub date_of_joining: String,
}

impl From<&Employee> for EmployeeForm {
    fn from(employee: &Employee) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            name: employee.name.clone(),
            current_department: text(&employee.current_department),
            role: text(&employee.role),
            current_project: text(&employee.current_project),
            phone: text(&employee.phone),
            address: text(&employee.address),
            skills: text(&employee.skills),
            date_of_joining: input_value(employee.date_of_joining.as_deref()),
        }
    }
}

impl EmployeeForm {
    pub fn apply(&mut self, options: FieldOptions) {
        let fields = [
            (options.name, &mut self.name),
            (options.department, &mut self.current_department),
            (options.role, &mut self.role),
            (options.project, &mut self.current_project),
            (options.phone, &mut self.phone),
            (options.address, &mut self.address),
            (options.skills, &mut self.skills),
            (options.joined, &mut self.date_of_joining),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value.trim().to_string();
            }
        }
    }

    pub fn prompt(&mut self, editor: Editor) -> Result<()> {
        self.name = prompt_text("Full name", &self.name)?;
        self.current_department = prompt_text(
            &format!("Department ({})", DEPARTMENTS.join(", ")),
            &self.current_department,
        )?;
        self.role = prompt_text("Job role", &self.role)?;

        if editor == Editor::Admin {
            self.current_project = prompt_text("Current project", &self.current_project)?;
        }

        self.phone = prompt_text("Phone number", &self.phone)?;
        self.address = prompt_text("Address", &self.address)?;
        self.skills = prompt_text("Skills (comma separated)", &self.skills)?;
        self.date_of_joining =
            prompt_text("Date of joining (YYYY-MM-DD)", &self.date_of_joining)?;

        Ok(())
    }

    pub fn validate(&self, editor: Editor) -> Result<EmployeeUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name, "Name is required");

        let department = self.current_department.trim();
        let current_department = match DEPARTMENTS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(department))
        {
            Some(known) => known.to_string(),
            None if department.is_empty() || editor == Editor::Admin => department.to_string(),
            None => {
                errors.push(
                    "current_department",
                    format!("Department must be one of {}", DEPARTMENTS.join(", ")),
                );
                String::new()
            }
        };

        let date_of_joining = match self.date_of_joining.trim() {
            "" => None,
            value => match parse_date(value) {
                Ok(date) if date > today() => {
                    errors.push("date_of_joining", "Date of joining cannot be in the future");
                    None
                }
                Ok(date) => Some(to_timestamp(date)),
                Err(error) => {
                    errors.push("date_of_joining", error.to_string());
                    None
                }
            },
        };

        errors.into_result(EmployeeUpdate {
            name: self.name.trim().to_string(),
            current_department,
            role: self.role.trim().to_string(),
            current_project: match editor {
                Editor::Admin => Some(self.current_project.trim().to_string()),
                Editor::SelfService => None,
            },
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            skills: self.skills.trim().to_string(),
            date_of_joining,
        })
    }
}
