use anyhow::Result;
use clap::Parser;

use super::utils::{explain_missing_profile, get_my_profile, update_my_profile};
use crate::commands::employees::form::{Editor, EmployeeForm, FieldOptions};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit your employee profile")]
pub struct Options {
    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    anyhow::ensure!(
        options.fields.project.is_none(),
        "Only administrators can change the current project"
    );

    let profile = get_my_profile(&state.http)
        .await
        .map_err(explain_missing_profile)?;

    let mut form = EmployeeForm::from(&profile);

    if options.fields.is_empty() {
        form.prompt(Editor::SelfService)?;
    } else {
        form.apply(options.fields);
    }

    let update = form.validate(Editor::SelfService)?;

    update_my_profile(&state.http, &update).await?;

    log::info!("Profile updated");

    Ok(())
}
