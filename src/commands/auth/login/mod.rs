mod flags_auth;

use anyhow::Result;
use clap::Parser;

use self::flags_auth::flags_login;
use super::utils::validate_credentials;
use crate::state::State;
use crate::store::Store;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Login to the employee directory")]
pub struct Options {
    #[clap(long = "email", help = "Email")]
    pub email: Option<String>,
    #[clap(
        long = "password",
        help = "Password",
        long_help = "Password, prompted for when omitted"
    )]
    pub password: Option<String>,
}

pub async fn handle(options: Options, state: &mut State) -> Result<()> {
    let (email, password) = flags_login(options, state.ctx.last_email.clone())?;

    validate_credentials(&email, &password)?;

    let landing = state.login(&email, &password).await?;

    remember_email(state, &email).await;

    log_signed_in(state, landing);

    Ok(())
}

pub(super) async fn remember_email(state: &mut State, email: &str) {
    state.ctx.last_email = Some(email.to_string());

    if let Err(error) = state.ctx.save().await {
        log::debug!("Failed to save context: {error}");
    }
}

pub(super) fn log_signed_in(state: &State, landing: crate::state::session::Route) {
    if let Some(identity) = state.identity() {
        log::info!(
            "Logged in as: `{}` ({})",
            identity.email,
            identity.role()
        );
    }

    log::info!("Landing on {landing}");
}
