mod show;
mod update;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "show", alias = "info")]
    Show(show::Options),
    #[clap(name = "update", alias = "edit")]
    Update(update::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "View and edit your employee profile")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Show(options) => show::handle(options, state).await,
        Commands::Update(options) => update::handle(options, state).await,
    }
}
