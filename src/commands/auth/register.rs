use anyhow::Result;
use clap::Parser;

use super::login::{log_signed_in, remember_email};
use super::utils::validate_credentials;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a new account")]
pub struct Options {
    #[clap(long = "email", help = "Email")]
    pub email: Option<String>,
    #[clap(long = "password", help = "Password, at least 6 characters")]
    pub password: Option<String>,
    #[clap(long = "admin", help = "Register as administrator")]
    pub admin: bool,
}

pub async fn handle(options: Options, state: &mut State) -> Result<()> {
    let email = match options.email {
        Some(email) => email,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match options.password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let email = email.trim().to_string();

    validate_credentials(&email, &password)?;

    let landing = state.register(&email, &password, options.admin).await?;

    remember_email(state, &email).await;

    log_signed_in(state, landing);

    Ok(())
}
