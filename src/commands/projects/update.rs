use anyhow::Result;
use clap::Parser;

use super::form::{ProjectFields, ProjectForm};
use super::utils::{get_project, update_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit one of your projects")]
pub struct Options {
    #[clap(name = "project", help = "ID of the project")]
    pub id: u64,

    #[clap(flatten)]
    pub fields: ProjectFields,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let project = get_project(&state.http, options.id).await?;
    let mut form = ProjectForm::from(&project);

    if options.fields.is_empty() {
        log::info!("Editing project: {}", project.project_name);

        form.prompt()?;
    } else {
        form.apply(options.fields);
    }

    let payload = form.validate()?;

    update_project(&state.http, project.id, &payload).await?;

    log::info!("Updated project `{}`", payload.project_name);

    Ok(())
}
