use anyhow::Result;
use clap::Parser;

use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
pub struct Options {}

pub async fn handle(_options: Options, state: &mut State) -> Result<()> {
    if !state.http.has_credential().await {
        log::info!("You are not logged in");

        return Ok(());
    }

    state.logout().await?;

    log::info!("You have been logged out");

    Ok(())
}
