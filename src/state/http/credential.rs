use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::store::auth::Auth;
use crate::store::Store;

/// The bearer token shared by every clone of the http client.
///
/// Tokens loaded from the auth store are written back on every change, tokens
/// handed in from the environment only live in memory.
#[derive(Debug, Clone, Default)]
pub struct Credential {
    token: Arc<RwLock<Option<String>>>,
    persist: bool,
}

impl Credential {
    pub async fn load() -> Result<Self> {
        let auth = Auth::new().await?;

        Ok(Self {
            token: Arc::new(RwLock::new(auth.token())),
            persist: true,
        })
    }

    pub fn ephemeral(token: Option<String>) -> Self {
        let token = Auth { token }.token();

        Self {
            token: Arc::new(RwLock::new(token)),
            persist: false,
        }
    }

    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_present(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub(super) async fn set(&self, token: String) -> Result<()> {
        let token = Auth { token: Some(token) }.token();

        *self.token.write().await = token.clone();

        self.persist(token).await
    }

    pub(super) async fn clear(&self) -> Result<()> {
        self.token.write().await.take();

        self.persist(None).await
    }

    async fn persist(&self, token: Option<String>) -> Result<()> {
        if self.persist {
            Auth { token }.save().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use reqwest::Method;

    use super::*;
    use crate::config::AUTH_STORE_PATH;
    use crate::state::http::testing::{route, MockServer};
    use crate::state::http::HttpClient;

    #[tokio::test]
    async fn test_ephemeral_lifecycle() {
        let credential = Credential::ephemeral(Some("abc".to_string()));
        let shared = credential.clone();

        assert_eq!(shared.get().await, Some("abc".to_string()));

        credential.clear().await.unwrap();
        assert!(!shared.is_present().await);

        credential.set("def".to_string()).await.unwrap();
        assert_eq!(shared.get().await, Some("def".to_string()));
    }

    #[tokio::test]
    async fn test_empty_token_is_absent() {
        let credential = Credential::ephemeral(Some(String::new()));
        assert!(!credential.is_present().await);

        credential.set("   ".to_string()).await.unwrap();
        assert!(!credential.is_present().await);
    }

    // only test that changes HOME
    #[tokio::test]
    async fn test_stored_credential_lifecycle() {
        let home = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", home.path());

        let path = home.path().join(AUTH_STORE_PATH);

        Auth {
            token: Some("stored".to_string()),
        }
        .save()
        .await
        .unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        let credential = Credential::load().await.unwrap();
        assert_eq!(credential.get().await, Some("stored".to_string()));

        credential.set("fresh".to_string()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"token":"fresh"}"#
        );

        let server = MockServer::start(vec![route("GET", "/users/me", 401, "{}")]).await;
        let http = HttpClient::new(credential, Some(server.url.clone())).unwrap();

        http.send(Method::GET, "/users/me", None, None)
            .await
            .unwrap_err();

        assert!(!http.has_credential().await);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"token":null}"#
        );
    }
}
