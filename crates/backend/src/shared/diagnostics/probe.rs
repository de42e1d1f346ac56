//! Reachability probes for API endpoints and images
//!
//! Each probe sends a single request with an explicit timeout and never
//! retries. Failures are appended to the diagnostic log.

use std::time::Duration;

use contracts::shared::diagnostics::ProbeResult;
use reqwest::header::CONTENT_TYPE;

use crate::shared::logger::{probe_category, DiagnosticLog};

#[derive(Debug, Clone)]
pub struct Prober {
    client: reqwest::Client,
    timeout: Duration,
    log: DiagnosticLog,
}

impl Prober {
    pub fn new(log: DiagnosticLog, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            timeout,
            log,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// HEAD the endpoint. Any HTTP status counts as reachable.
    pub async fn check_api_endpoint(&self, endpoint: &str) -> ProbeResult {
        let request = self.client.head(endpoint).send();

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => {
                tracing::debug!(endpoint, status = response.status().as_u16(), "probe ok");
                ProbeResult::reachable(response.status().as_u16())
            }
            Ok(Err(e)) => self.endpoint_failed(endpoint, e.to_string()),
            Err(_) => self.endpoint_failed(endpoint, self.timeout_message()),
        }
    }

    /// GET the image. True only for a 2xx response with an image content type.
    pub async fn check_image_exists(&self, url: &str) -> bool {
        let request = self.client.get(url).send();

        let failure = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => {
                let is_image = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|ct| ct.starts_with("image/"));

                if response.status().is_success() && is_image {
                    return true;
                }
                if is_image {
                    format!("status {}", response.status().as_u16())
                } else {
                    "not an image".to_string()
                }
            }
            Ok(Err(e)) => e.to_string(),
            Err(_) => self.timeout_message(),
        };

        tracing::warn!(url, reason = %failure, "image probe failed");
        self.log
            .server(probe_category(), format!("Admin image {url} failed to load"));
        false
    }

    fn endpoint_failed(&self, endpoint: &str, error: String) -> ProbeResult {
        tracing::warn!(endpoint, error = %error, "endpoint probe failed");
        self.log.server(
            probe_category(),
            format!("Admin API endpoint {endpoint} is not accessible: {error}"),
        );
        ProbeResult::unreachable(error)
    }

    fn timeout_message(&self) -> String {
        format!("timed out after {}ms", self.timeout.as_millis())
    }
}
