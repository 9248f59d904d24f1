use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::AUTH_STORE_PATH;
use crate::impl_store;

/// Persisted bearer credential, one per machine user.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Auth {
    pub token: Option<String>,
}

impl Storable for Auth {
    fn path() -> Result<PathBuf> {
        home_path(AUTH_STORE_PATH)
    }
}

impl_store!(Auth);

impl Auth {
    /// Stored token, ignoring blank values left behind by hand edits.
    pub fn token(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        let auth = Auth {
            token: Some("  \n".to_string()),
        };

        assert_eq!(auth.token(), None);
    }

    #[test]
    fn test_token_is_trimmed() {
        let auth = Auth {
            token: Some(" abc.def \n".to_string()),
        };

        assert_eq!(auth.token(), Some("abc.def".to_string()));
    }

    #[test]
    fn test_store_format() {
        let auth: Auth = serde_json::from_str(r#"{"token":"xyz"}"#).unwrap();
        assert_eq!(auth.token(), Some("xyz".to_string()));

        let auth: Auth = serde_json::from_str("{}").unwrap();
        assert_eq!(auth.token(), None);
    }
}
