use anyhow::Result;
use clap::Parser;

use super::form::{ProjectFields, ProjectForm};
use super::utils::{create_project, format_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Add a project to your history")]
pub struct Options {
    #[clap(flatten)]
    pub fields: ProjectFields,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let mut form = ProjectForm::default();

    if options.fields.is_empty() {
        form.prompt()?;
    } else {
        form.apply(options.fields);
    }

    let payload = form.validate()?;
    let project = create_project(&state.http, &payload).await?;

    log::info!("Added project {}", format_project(&project));

    Ok(())
}
