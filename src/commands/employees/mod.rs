mod delete;
pub mod form;
pub mod list;
pub mod types;
mod update;
mod upload;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "update", alias = "edit")]
    Update(update::Options),
    #[clap(name = "rm", alias = "del", alias = "delete", alias = "remove")]
    Delete(delete::Options),
    #[clap(name = "upload", alias = "import")]
    Upload(upload::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage employee records (administrators only)")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Update(options) => update::handle(options, state).await,
        Commands::Delete(options) => delete::handle(options, state).await,
        Commands::Upload(options) => upload::handle(options, state).await,
    }
}
