//! Persisted auth token storage.
//!
//! The bearer token lives in a small JSON file under a fixed key so a
//! session survives process restarts. An in-memory copy backs reads; `set`
//! and `clear` write through to disk.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde_json::{json, Value};
use tracing::{error, info};

use crate::error::Result;

/// Key used to store the auth token in the store file.
const TOKEN_KEY: &str = "auth_token";

/// File-backed store for the bearer token.
#[derive(Debug)]
pub struct TokenStore {
    path: PathBuf,
    cached: RwLock<Option<String>>,
}

impl TokenStore {
    /// Open a store at the given path, loading any persisted token.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = RwLock::new(read_token(&path));
        Self { path, cached }
    }

    /// The current token, if one is stored.
    pub fn get(&self) -> Option<String> {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persist a new token.
    pub fn set(&self, token: &str) -> Result<()> {
        let contents = serde_json::to_string_pretty(&json!({ TOKEN_KEY: token }))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)?;
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        info!("Auth token saved");
        Ok(())
    }

    /// Remove the stored token and its file.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
        info!("Auth token cleared");
        Ok(())
    }
}

/// Read a persisted token from disk, tolerating a missing or invalid file.
fn read_token(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let value: Value = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse token store {}: {}", path.display(), e);
            return None;
        }
    };
    value.get(TOKEN_KEY)?.as_str().map(String::from)
}
