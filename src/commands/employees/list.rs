use anyhow::Result;
use clap::Parser;

use super::utils::{filter_employees, format_employees, get_all_employees};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List all employees")]
pub struct Options {
    #[clap(
        short = 's',
        long = "search",
        help = "Only show employees whose name, email or employee ID contains this"
    )]
    pub search: Option<String>,

    #[clap(short = 'q', long = "quiet", help = "Only print the IDs of the employees")]
    pub quiet: bool,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let employees = get_all_employees(&state.http).await?;
    let search = options.search.unwrap_or_default();
    let filtered = filter_employees(&employees, &search);

    if options.quiet {
        let ids = filtered
            .iter()
            .map(|employee| employee.id.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    log::info!("Employees ({})", employees.len());

    if filtered.is_empty() {
        if search.trim().is_empty() {
            log::info!("No employees available");
        } else {
            log::info!("No employees found matching your search");
        }

        return Ok(());
    }

    let employees_fmt = format_employees(&filtered, true);

    println!("{}", employees_fmt.join("\n"));

    Ok(())
}
