use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway answered with status {0}")]
    Status(u16),
}

/// HTTP-клиент для upstream identity gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Профиль текущего пользователя: GET {gateway}/api/v1/me
    ///
    /// The caller's `Authorization` header is forwarded unchanged. The body is
    /// passed through as-is; its shape belongs to the gateway.
    pub async fn fetch_current_user(
        &self,
        authorization: Option<&str>,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}/api/v1/me", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::Status(response.status().as_u16()));
        }

        Ok(response.json::<serde_json::Value>().await?)
    }
}
