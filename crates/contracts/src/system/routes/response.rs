use serde::{Deserialize, Serialize};

use super::issue::{IssueKind, RouteIssue};

/// Result of validating one path for one caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteValidation {
    pub is_valid: bool,
    pub issues: Vec<RouteIssue>,
}

impl RouteValidation {
    pub fn from_issues(issues: Vec<RouteIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Issues rendered as messages, in the order they were found
    pub fn errors(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    pub fn has(&self, kind: IssueKind) -> bool {
        self.issues.iter().any(|i| i.kind() == kind)
    }

    pub fn into_response(self, path: &str) -> RouteValidationResponse {
        RouteValidationResponse {
            path: path.to_string(),
            is_valid: self.is_valid,
            errors: self.errors(),
            issues: self.issues,
        }
    }
}

/// GET /api/system/routes/validate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteValidationResponse {
    pub path: String,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub issues: Vec<RouteIssue>,
}

/// GET /api/system/routes/validate-all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateAllRoutesResponse {
    pub total_routes: usize,
    pub valid_routes: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub path: String,
    pub title: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// GET /api/system/routes/access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteAccessResponse {
    pub path: String,
    pub allowed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteQuery {
    pub path: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub role: Option<String>,
}
