//! Authentication operations.

use reqwest::Method;
use serde_json::{json, Value};
use tracing::info;

use crate::client::{CredideskClient, RequestOptions};
use crate::error::{ClientError, Result};

impl CredideskClient {
    /// Log in with email and password, persisting the returned token.
    ///
    /// The server reports the token under either `token` or `access_token`;
    /// both are accepted. The persisted token is attached as a bearer header
    /// to every subsequent request until [`CredideskClient::logout`].
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let credentials = json!({ "email": email, "password": password });
        let result = self
            .execute(
                Method::POST,
                "/auth/login",
                RequestOptions::new().json(&credentials)?,
            )
            .await?;

        let token = result
            .get("token")
            .and_then(Value::as_str)
            .or_else(|| result.get("access_token").and_then(Value::as_str))
            .ok_or_else(|| {
                ClientError::InvalidResponse(
                    "login response missing token or access_token".to_string(),
                )
            })?;

        self.token_store().set(token)?;
        info!("Logged in as {}", email);
        Ok(token.to_string())
    }

    /// Discard the persisted token. Local only; no server call.
    pub fn logout(&self) -> Result<()> {
        self.token_store().clear()
    }

    /// The currently persisted auth token, if any.
    pub fn auth_token(&self) -> Option<String> {
        self.token_store().get()
    }
}
