use anyhow::Result;
use clap::Parser;

use super::form::{Editor, EmployeeForm, FieldOptions};
use super::utils::{get_employee, update_employee};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Edit an employee record")]
pub struct Options {
    #[clap(name = "employee", help = "ID of the employee record")]
    pub id: u64,

    #[clap(flatten)]
    pub fields: FieldOptions,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let employee = get_employee(&state.http, options.id).await?;
    let mut form = EmployeeForm::from(&employee);

    if options.fields.is_empty() {
        log::info!("Editing employee: {}", employee.name);

        form.prompt(Editor::Admin)?;
    } else {
        form.apply(options.fields);
    }

    let update = form.validate(Editor::Admin)?;

    update_employee(&state.http, employee.id, &update).await?;

    log::info!("Updated employee `{}` ({})", update.name, employee.employee_id);

    Ok(())
}
