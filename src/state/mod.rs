pub mod http;
pub mod session;

use anyhow::Result;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use self::http::{Credential, HttpClient, SessionEvent};
use self::session::{Access, Identity, Route, Session};
use crate::commands::auth::utils::{current_user, login, register};
use crate::store::context::Context;
use crate::store::Store;

/// Session/auth gate: owns the resolved identity and the screen the user is on.
///
/// The credential itself lives in [`HttpClient`], the gate only reacts to the
/// events the client broadcasts so both always agree.
#[derive(Debug)]
pub struct State {
    pub http: HttpClient,
    pub ctx: Context,
    session: Session,
    view: Route,
    events: Receiver<SessionEvent>,
}

pub struct StateOptions {
    pub override_token: Option<String>,
    pub override_api_url: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let ctx = Context::new().await?;

        // prefer the override token over the stored one
        let credential = match options.override_token {
            Some(token) => Credential::ephemeral(Some(token)),
            None => Credential::load().await?,
        };

        let http = HttpClient::new(
            credential,
            options.override_api_url.or_else(|| ctx.api_url.clone()),
        )?;

        Ok(Self::with_client(http, ctx))
    }

    pub fn with_client(http: HttpClient, ctx: Context) -> Self {
        Self {
            events: http.subscribe(),
            session: Session::Loading,
            view: Route::Login,
            http,
            ctx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn view(&self) -> Route {
        self.view
    }

    /// Resolves the identity behind the stored credential, once per run.
    ///
    /// A missing credential goes straight to anonymous. A credential the
    /// backend refuses is discarded.
    pub async fn resolve(&mut self) -> &Session {
        if !self.session.is_loading() {
            return &self.session;
        }

        if !self.http.has_credential().await {
            log::debug!("No credential, session is anonymous");

            self.session = Session::Anonymous;
            return &self.session;
        }

        self.session = match current_user(&self.http).await {
            Ok(identity) => {
                log::debug!("Resolved session for {}", identity.email);

                Session::Authenticated(identity)
            }

            Err(error) => {
                log::debug!("Failed to resolve session: {error}");

                if let Err(error) = self.http.clear_credential().await {
                    log::warn!("Failed to clear the stored credential: {error}");
                }

                Session::Anonymous
            }
        };

        // a 401 above already reset everything
        self.sync_session();

        &self.session
    }

    /// Signs in with email and password, returns the screen to land on.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Route> {
        let token = match login(&self.http, email, password).await {
            Ok(token) => token,

            Err(error) => {
                // a 401 here already dropped the previous credential
                self.sync_session();

                return Err(error);
            }
        };

        self.authorize(token).await
    }

    pub async fn register(&mut self, email: &str, password: &str, is_admin: bool) -> Result<Route> {
        let token = match register(&self.http, email, password, is_admin).await {
            Ok(token) => token,

            Err(error) => {
                self.sync_session();

                return Err(error);
            }
        };

        self.authorize(token).await
    }

    async fn authorize(&mut self, token: String) -> Result<Route> {
        // events from before this login are stale
        self.drain_events();

        self.http.set_credential(token).await?;

        let identity = match current_user(&self.http).await {
            Ok(identity) => identity,

            Err(error) => {
                self.http.clear_credential().await?;
                self.drain_events();
                self.session = Session::Anonymous;
                self.view = Route::Login;

                return Err(error);
            }
        };

        let route = Route::landing(&identity);

        self.session = Session::Authenticated(identity);
        self.view = route;

        Ok(route)
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.http.clear_credential().await?;

        self.session = Session::Anonymous;
        self.view = Route::Login;

        Ok(())
    }

    /// Asks the gate for `route` and moves the view accordingly.
    pub fn enter(&mut self, route: Route) -> Access {
        // never guard with an identity whose credential is gone
        self.sync_session();

        let access = self.session.guard(route);

        match access {
            Access::Render => self.view = route,
            Access::Redirect(to) => self.view = to,
            Access::Wait => {}
        }

        access
    }

    /// Applies the events broadcast by the http client.
    ///
    /// Returns `true` when the session expired since the last sync, in which
    /// case the user is anonymous and back on the login screen.
    pub fn sync_session(&mut self) -> bool {
        let expired = self.drain_events();

        if expired {
            self.session = Session::Anonymous;
            self.view = Route::Login;
        }

        expired
    }

    fn drain_events(&mut self) -> bool {
        let mut expired = false;

        loop {
            match self.events.try_recv() {
                Ok(SessionEvent::Expired) => expired = true,
                // missed events can only be expiries
                Err(TryRecvError::Lagged(_)) => expired = true,
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        expired
    }
}
