use anyhow::{anyhow, Result};
use clap::Parser;

use super::utils::{delete_employee, get_employee};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Delete an employee record")]
pub struct Options {
    #[clap(name = "employee", help = "ID of the employee record")]
    pub id: u64,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    if !options.force {
        let employee = get_employee(&state.http, options.id).await?;

        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete `{}` ({})?",
                employee.name, employee.employee_id
            ))
            .default(false)
            .interact_opt()?
            .ok_or_else(|| anyhow!("Aborted"))?;

        if !confirmed {
            return Err(anyhow!("Aborted"));
        }
    }

    delete_employee(&state.http, options.id).await?;

    log::info!("Employee `{}` deleted", options.id);

    Ok(())
}
