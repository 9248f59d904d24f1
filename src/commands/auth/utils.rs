use anyhow::{anyhow, ensure, Result};
use reqwest::Method;

use super::types::{RegisterRequest, TokenResponse};
use crate::state::http::{HttpClient, RequestBody};
use crate::state::session::Identity;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Exchanges email and password for a bearer token.
///
/// The token endpoint only accepts a form body with `username` and `password`.
pub async fn login(http: &HttpClient, email: &str, password: &str) -> Result<String> {
    let response = http
        .request::<TokenResponse>(
            Method::POST,
            "/auth/token",
            Some(RequestBody::Form(vec![
                ("username".to_string(), email.to_string()),
                ("password".to_string(), password.to_string()),
            ])),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing login response"))?;

    log::debug!("Received {:?} token", response.token_type);

    Ok(response.access_token)
}

pub async fn register(
    http: &HttpClient,
    email: &str,
    password: &str,
    is_admin: bool,
) -> Result<String> {
    let response = http
        .request::<TokenResponse>(
            Method::POST,
            "/auth/register",
            Some(RequestBody::json(&RegisterRequest {
                email,
                password,
                is_admin,
            })?),
        )
        .await?
        .ok_or_else(|| anyhow!("Error while parsing register response"))?;

    Ok(response.access_token)
}

pub async fn current_user(http: &HttpClient) -> Result<Identity> {
    let identity = http
        .request::<Identity>(Method::GET, "/users/me", None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(identity)
}

/// Same checks the sign in form runs before anything is sent.
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    let email = email.trim();

    ensure!(!email.is_empty(), "Email is required");
    ensure!(
        email
            .split_once('@')
            .map_or(false, |(user, domain)| !user.is_empty() && !domain.is_empty()),
        "`{email}` is not a valid email address"
    );
    ensure!(
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        "Password must be at least {MIN_PASSWORD_LENGTH} characters"
    );

    Ok(())
}
