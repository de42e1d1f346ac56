use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::component::AdminComponent;

/// Classification of everything the registry and the diagnostics can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    RouteNotFound,
    ComponentNotRegistered,
    AuthenticationRequired,
    InsufficientRole,
    MissingMetadata,
    /// Only produced by reachability probes, never by route validation
    ProbeUnreachable,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::RouteNotFound => "route_not_found",
            IssueKind::ComponentNotRegistered => "component_not_registered",
            IssueKind::AuthenticationRequired => "authentication_required",
            IssueKind::InsufficientRole => "insufficient_role",
            IssueKind::MissingMetadata => "missing_metadata",
            IssueKind::ProbeUnreachable => "probe_unreachable",
        }
    }

    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            IssueKind::RouteNotFound => "route not found",
            IssueKind::ComponentNotRegistered => "component not found",
            IssueKind::AuthenticationRequired => "authentication required",
            IssueKind::InsufficientRole => "insufficient permissions",
            IssueKind::MissingMetadata => "missing required meta title",
            IssueKind::ProbeUnreachable => "probe unreachable",
        }
    }
}

/// A single finding of route validation.
///
/// Issues are advisory values: validation collects them and leaves the
/// decision to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteIssue {
    #[error("Admin route {path} not found in route configuration")]
    RouteNotFound { path: String },

    #[error("Admin component {component} not found or not properly exported")]
    ComponentNotRegistered { component: AdminComponent },

    #[error("Admin route {path} requires authentication but no token found")]
    AuthenticationRequired { path: String },

    #[error("User role {role} not authorized for route {route}")]
    InsufficientRole { role: String, route: String },

    #[error("Admin route {route} missing required meta title")]
    MissingMetadata { route: String },
}

impl RouteIssue {
    pub fn kind(&self) -> IssueKind {
        match self {
            RouteIssue::RouteNotFound { .. } => IssueKind::RouteNotFound,
            RouteIssue::ComponentNotRegistered { .. } => IssueKind::ComponentNotRegistered,
            RouteIssue::AuthenticationRequired { .. } => IssueKind::AuthenticationRequired,
            RouteIssue::InsufficientRole { .. } => IssueKind::InsufficientRole,
            RouteIssue::MissingMetadata { .. } => IssueKind::MissingMetadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_messages() {
        let issue = RouteIssue::InsufficientRole {
            role: "manager".to_string(),
            route: "/business".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "User role manager not authorized for route /business"
        );
        assert_eq!(issue.kind().label(), "insufficient permissions");

        let issue = RouteIssue::ComponentNotRegistered {
            component: AdminComponent::Reports,
        };
        assert_eq!(
            issue.to_string(),
            "Admin component Reports not found or not properly exported"
        );
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = RouteIssue::RouteNotFound {
            path: "/nope".to_string(),
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "route_not_found");
        assert_eq!(json["path"], "/nope");
    }
}
