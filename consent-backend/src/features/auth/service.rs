// src/features/auth/service.rs

use serde::Serialize;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::features::auth::dto::{SigninRequest, SignupRequest};

/// Forwards login/signup requests to the external authentication backend
/// and relays its JSON response. No tokens are minted or verified here.
pub struct AuthGatewayService {
    client: reqwest::Client,
    base_url: String,
}

impl AuthGatewayService {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.auth_backend_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn signup(&self, request: &SignupRequest) -> AppResult<serde_json::Value> {
        self.forward("/auth/signup", request).await
    }

    pub async fn signin(&self, request: &SigninRequest) -> AppResult<serde_json::Value> {
        self.forward("/auth/signin", request).await
    }

    async fn forward<T: Serialize>(&self, path: &str, body: &T) -> AppResult<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Auth backend unreachable: {}", e))
            })?;

        let status = response.status();
        let payload: serde_json::Value = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Auth backend returned malformed JSON: {}", e))
        })?;

        if status.is_success() {
            Ok(payload)
        } else if status.is_client_error() {
            let message = payload
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Authentication failed")
                .to_string();
            Err(AppError::Unauthorized(message))
        } else {
            Err(AppError::ExternalServiceError(format!(
                "Auth backend responded with status {}",
                status
            )))
        }
    }
}
