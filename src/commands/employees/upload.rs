use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use super::utils::{check_upload, explain_upload_error, upload_employees, MAX_UPLOAD_SIZE};
use crate::state::http::ApiError;
use crate::state::State;
use crate::utils::size::{kilobytes, user_friendly_size};

#[derive(Debug, Parser)]
#[clap(
    about = "Bulk import or update employees from an Excel file",
    long_about = "Bulk import or update employees from an Excel file (.xlsx or .xls, up to 10MB).\n\nRequired columns: employee_id, name, email\nOptional columns: date_of_joining, current_department, role, current_project, phone, address, skills\n\nRows with an existing employee_id update that record."
)]
pub struct Options {
    #[clap(name = "file", help = "Path to the spreadsheet")]
    pub file: PathBuf,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let file = check_upload(&options.file).await?;

    log::info!(
        "Uploading {} ({}, max {})",
        file.file_name,
        kilobytes(file.size),
        user_friendly_size(MAX_UPLOAD_SIZE)
    );

    let summary = match upload_employees(&state.http, &file).await {
        Ok(summary) => summary,

        Err(error) => {
            return Err(match error.downcast_ref::<ApiError>() {
                Some(ApiError::Unauthorized) | None => error,
                Some(api_error) => anyhow!(explain_upload_error(&api_error.to_string())),
            });
        }
    };

    if let Some(message) = summary.message {
        log::info!("{message}");
    }

    if summary.created.is_some() || summary.updated.is_some() {
        log::info!(
            "Created {}, updated {}",
            summary.created.unwrap_or_default(),
            summary.updated.unwrap_or_default()
        );
    }

    log::info!("Employee data uploaded");

    Ok(())
}
