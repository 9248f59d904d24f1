use anyhow::{anyhow, Result};
use clap::Parser;

use super::utils::{delete_project, get_project};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Delete one of your projects")]
pub struct Options {
    #[clap(name = "project", help = "ID of the project")]
    pub id: u64,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    if !options.force {
        let project = get_project(&state.http, options.id).await?;

        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete the project `{}`?",
                project.project_name
            ))
            .default(false)
            .interact_opt()?
            .ok_or_else(|| anyhow!("Aborted"))?;

        if !confirmed {
            return Err(anyhow!("Aborted"));
        }
    }

    delete_project(&state.http, options.id).await?;

    log::info!("Project `{}` deleted", options.id);

    Ok(())
}
