//! Client configuration loaded from environment variables.

use std::{env, path::PathBuf};

/// Default base URL for the credidesk API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default file for the persisted auth token.
pub const DEFAULT_TOKEN_FILE: &str = "credidesk-auth.json";

/// Configuration for a [`crate::CredideskClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all relative requests (default: "http://localhost:3000/api")
    pub base_url: String,
    /// Optional path prefix folded into the base URL.
    pub api_prefix: Option<String>,
    /// Path of the persisted auth token file (default: "credidesk-auth.json")
    pub token_file: PathBuf,
}

impl ClientConfig {
    /// Create a configuration with the given base URL and default token file.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: None,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CREDIDESK_URL` - Base URL (default: "http://localhost:3000/api")
    /// - `CREDIDESK_API_PREFIX` - Optional path prefix folded into the base URL
    /// - `CREDIDESK_TOKEN_FILE` - Auth token file (default: "credidesk-auth.json")
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("CREDIDESK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_prefix: env::var("CREDIDESK_API_PREFIX")
                .ok()
                .filter(|prefix| !prefix.trim().is_empty()),
            token_file: env::var("CREDIDESK_TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE)),
        }
    }

    /// Set the path prefix.
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    /// Set the token file path.
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = path.into();
        self
    }

    /// Base URL with the optional path prefix folded in.
    ///
    /// The prefix is applied here, exactly once, so request paths never
    /// carry it themselves and double-prefixing cannot happen.
    pub fn effective_base_url(&self) -> String {
        match &self.api_prefix {
            Some(prefix) => format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                prefix.trim_matches('/')
            ),
            None => self.base_url.clone(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
