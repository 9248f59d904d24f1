pub mod auth;
pub mod completions;
pub mod employees;
pub mod profile;
pub mod projects;
pub mod whoami;

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::state::session::{Access, Route};
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(name = "whoami", alias = "info", alias = "ctx")]
    Whoami(whoami::Options),
    Profile(profile::Options),
    #[clap(name = "projects", alias = "project")]
    Projects(projects::Options),
    #[clap(name = "employees", alias = "admin")]
    Employees(employees::Options),
    Completions(completions::Options),
}

impl Commands {
    /// Screen the command belongs to, the gate decides if it may run.
    pub fn route(&self) -> Route {
        match self {
            Self::Auth(_) | Self::Completions(_) => Route::Login,
            Self::Whoami(_) | Self::Profile(_) => Route::Dashboard,
            Self::Projects(_) => Route::Projects,
            Self::Employees(_) => Route::Admin,
        }
    }
}

pub async fn handle_command(command: Commands, state: &mut State) -> Result<()> {
    match command {
        Commands::Auth(options) => auth::handle(options, state).await,
        Commands::Completions(options) => {
            completions::handle(options);

            Ok(())
        }

        guarded_command => {
            let route = guarded_command.route();

            state.resolve().await;

            match state.enter(route) {
                Access::Render => {}

                Access::Redirect(to) => {
                    log::debug!("Redirected from {route} to {to}");

                    if state.identity().is_some() {
                        bail!("This command is only available to administrators");
                    }

                    bail!("You are not logged in. Please run `staffdir auth login` first.");
                }

                Access::Wait => bail!("Your session could not be resolved, please try again"),
            }

            let result = match guarded_command {
                Commands::Auth(_) | Commands::Completions(_) => unreachable!(),
                Commands::Whoami(options) => whoami::handle(options, state),
                Commands::Profile(options) => profile::handle(options, state).await,
                Commands::Projects(options) => projects::handle(options, state).await,
                Commands::Employees(options) => employees::handle(options, state).await,
            };

            if state.sync_session() {
                log::warn!("You have been logged out, run `staffdir auth login` to sign in again");
            }

            result
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::http::testing::{route, MockServer};
    use crate::state::http::{Credential, HttpClient};
    use crate::store::context::Context;

    fn state(server: &MockServer, token: Option<&str>) -> State {
        let http = HttpClient::new(
            Credential::ephemeral(token.map(str::to_string)),
            Some(server.url.clone()),
        )
        .unwrap();

        State::with_client(http, Context::default())
    }

    fn employees_ls() -> Commands {
        Commands::Employees(employees::Options {
            commands: employees::Commands::List(employees::list::Options {
                search: None,
                quiet: false,
            }),
        })
    }

    #[tokio::test]
    async fn test_anonymous_is_sent_to_login() {
        let server = MockServer::start(vec![]).await;
        let mut state = state(&server, None);

        let error = handle_command(employees_ls(), &mut state)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("staffdir auth login"));
        assert_eq!(state.view(), Route::Login);
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_employee_cannot_open_admin() {
        let server = MockServer::start(vec![route(
            "GET",
            "/users/me",
            200,
            r#"{"email":"jane@corp.io","is_admin":false}"#,
        )])
        .await;
        let mut state = state(&server, Some("good"));

        let error = handle_command(employees_ls(), &mut state)
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "This command is only available to administrators"
        );
        // only the identity lookup went out
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_expiry_during_command() {
        let server = MockServer::start(vec![
            route("GET", "/users/me", 200, r#"{"email":"root@corp.io","is_admin":true}"#),
            route("GET", "/admin/employees", 401, r#"{"detail":"expired"}"#),
        ])
        .await;
        let mut state = state(&server, Some("good"));

        let error = handle_command(employees_ls(), &mut state)
            .await
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Your session has expired. Please login again."
        );
        assert_eq!(state.view(), Route::Login);
        assert!(state.identity().is_none());
    }

    #[test]
    fn test_routes() {
        assert_eq!(employees_ls().route(), Route::Admin);
        assert!(!Commands::Completions(completions::Options {
            shell: clap_complete::Shell::Bash
        })
        .route()
        .requires_auth());
    }
}
