use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user behind the current credential, as reported by `/users/me`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// whatever else the backend sends along (id, is_active, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    pub fn role(&self) -> &'static str {
        if self.is_admin {
            "administrator"
        } else {
            "employee"
        }
    }
}

/// Screens a command can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Projects,
    Admin,
}

impl Route {
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Login)
    }

    pub fn admin_only(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Projects => "/projects",
            Self::Admin => "/admin",
        }
    }

    /// Where a freshly signed in user is sent.
    pub fn landing(identity: &Identity) -> Self {
        if identity.is_admin {
            Self::Admin
        } else {
            Self::Dashboard
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// identity not resolved yet
    Loading,
    Authenticated(Identity),
    Anonymous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    Redirect(Route),
    /// still loading, nothing is shown and nothing is redirected
    Wait,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Decides whether `route` may be shown in the current state.
    ///
    /// Public routes always render. Guarded routes wait while loading and
    /// otherwise need an authenticated identity, which must be an admin for
    /// admin only routes. Everything else is sent to the login screen.
    pub fn guard(&self, route: Route) -> Access {
        if !route.requires_auth() {
            return Access::Render;
        }

        match self {
            Self::Loading => Access::Wait,

            Self::Authenticated(identity) if !route.admin_only() || identity.is_admin => {
                Access::Render
            }

            _ => Access::Redirect(Route::Login),
        }
    }
}
