use serde::{Deserialize, Serialize};

/// Outcome of an API endpoint probe.
///
/// `status` is 0 when the endpoint could not be reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn reachable(status: u16) -> Self {
        Self {
            status,
            error: None,
        }
    }

    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            status: 0,
            error: Some(error.into()),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.status != 0
    }
}

/// POST /api/diagnostics/probe/endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeEndpointRequest {
    pub endpoint: String,
}

/// POST /api/diagnostics/probe/image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeImageRequest {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeImageResponse {
    pub url: String,
    pub exists: bool,
}

fn default_app() -> String {
    "admin".to_string()
}

/// Report sent by the dashboard's error boundary (POST /api/error-report)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    #[serde(default = "default_app")]
    pub app: String,
    pub message: String,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub component_stack: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ErrorReport {
    /// One-line form stored in the diagnostic log
    pub fn summary(&self) -> String {
        match &self.url {
            Some(url) => format!("[{}] {} at {}", self.app, self.message.trim(), url),
            None => format!("[{}] {}", self.app, self.message.trim()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReportAccepted {
    pub id: i64,
}
