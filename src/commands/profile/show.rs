use anyhow::Result;
use clap::Parser;

use super::utils::{explain_missing_profile, format_profile, get_my_profile};
use crate::commands::projects::utils::{format_projects, get_my_projects};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show your employee profile")]
pub struct Options {}

pub async fn handle(_options: Options, state: &State) -> Result<()> {
    let (profile, projects) = tokio::join!(
        get_my_profile(&state.http),
        get_my_projects(&state.http)
    );

    let profile = profile.map_err(explain_missing_profile)?;

    println!("{}", format_profile(&profile).join("\n"));

    match projects {
        Ok(projects) if projects.is_empty() => {
            println!("\nProjects: none yet");
        }

        Ok(projects) => {
            println!("\nProjects ({}):", projects.len());
            println!("{}", format_projects(&projects, true).join("\n"));
        }

        Err(error) => log::warn!("Could not load your projects: {error}"),
    }

    Ok(())
}
