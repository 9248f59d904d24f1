use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::utils::home_path;
use super::Storable;
use crate::config::CONTEXT_STORE_PATH;
use crate::impl_store;

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Context {
    /// Overrides the default backend location, the env var still wins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Email of the last successful login, used as the prompt default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_email: Option<String>,
}

impl Storable for Context {
    fn path() -> Result<PathBuf> {
        home_path(CONTEXT_STORE_PATH)
    }
}

impl_store!(Context);
