use anyhow::{anyhow, Result};
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get information about the current user", alias = "me")]
pub struct Options {}

pub fn handle(_options: Options, state: &State) -> Result<()> {
    let identity = state
        .identity()
        .ok_or_else(|| anyhow!("You are not logged in. Please run `staffdir auth login` first."))?;

    println!(
        "You are logged in as `{}` ({})",
        identity.email,
        identity.role()
    );

    if let Some(id) = identity.extra.get("id") {
        println!("User ID: {id}");
    }

    log::debug!("Session view: {}", state.view());

    Ok(())
}
