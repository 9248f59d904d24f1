pub mod login;
mod logout;
mod register;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    #[clap(name = "register", alias = "signup")]
    Register(register::Options),
    Logout(logout::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Authenticate with the employee directory")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &mut State) -> Result<()> {
    match options.commands {
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Register(options) => register::handle(options, state).await,
        Commands::Logout(options) => logout::handle(options, state).await,
    }
}
