use crate::config::Config;
use crate::error::{calendar_error, AppResult};
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// OAuth token as persisted in the token file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp after which the access token is no longer valid
    pub expires_at: i64,
}

/// Manages the OAuth token persisted on local disk
#[derive(Clone)]
pub struct TokenManager {
    config: Arc<RwLock<Config>>,
    client: Client,
}

impl TokenManager {
    pub fn new(config: Arc<RwLock<Config>>) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Get a valid access token, refreshing the stored one when expired
    pub async fn get_access_token(&self) -> AppResult<String> {
        let token_path = {
            let config_read = self.config.read().await;
            config_read.token_path.clone()
        };

        let content = tokio::fs::read_to_string(&token_path).await.map_err(|e| {
            calendar_error(&format!(
                "No token file at {}: {}. Run the get_calendar_token binary first.",
                token_path, e
            ))
        })?;

        let token: StoredToken = serde_json::from_str(&content)
            .map_err(|e| calendar_error(&format!("Failed to parse token file: {}", e)))?;

        if token.expires_at > Utc::now().timestamp() {
            return Ok(token.access_token);
        }

        // Token is expired, refresh it
        let refreshed = self.refresh_token(&token).await?;
        Ok(refreshed.access_token)
    }

    /// Refresh an expired token and persist the result
    async fn refresh_token(&self, token: &StoredToken) -> AppResult<StoredToken> {
        let (client_id, client_secret, token_url) = {
            let config_read = self.config.read().await;
            (
                config_read.google_client_id.clone(),
                config_read.google_client_secret.clone(),
                config_read.token_url.clone(),
            )
        };

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", token.refresh_token.clone()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post(&token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| calendar_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(calendar_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: serde_json::Value = response
            .json()
            .await
            .map_err(|e| calendar_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| calendar_error("Token response missing 'access_token' field"))?;

        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);

        // Combine the new access token with the existing refresh token
        let refreshed = StoredToken {
            access_token: access_token.to_string(),
            refresh_token: token.refresh_token.clone(),
            expires_at: Utc::now().timestamp() + expires_in,
        };

        self.set_token(&refreshed).await?;
        info!("Refreshed Google Calendar access token");

        Ok(refreshed)
    }

    /// Write the token to the token file (also used by the authorization binary)
    pub async fn set_token(&self, token: &StoredToken) -> AppResult<()> {
        let token_path = {
            let config_read = self.config.read().await;
            config_read.token_path.clone()
        };

        let content = serde_json::to_string_pretty(token)?;
        tokio::fs::write(&token_path, content)
            .await
            .map_err(|e| calendar_error(&format!("Failed to save token file: {}", e)))?;

        Ok(())
    }
}
