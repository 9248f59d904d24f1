#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use staffdir_cli::commands::handle_command;
use staffdir_cli::config::{API_URL_ENV, TOKEN_ENV};
use staffdir_cli::state::{State, StateOptions};
use staffdir_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let mut state = State::new(StateOptions {
        override_token: std::env::var(TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty()),
        override_api_url: std::env::var(API_URL_ENV).ok(),
    })
    .await?;

    if let Err(error) = handle_command(cli.commands, &mut state).await {
        log::error!("{error}");
        std::process::exit(1);
    }

    Ok(())
}
