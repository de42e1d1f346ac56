use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Views of the admin dashboard that a route can be bound to.
///
/// The set is closed: a route table that names anything else is rejected
/// when the registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AdminComponent {
    Dashboard,
    BusinessManagement,
    BusinessDetails,
    UserManagement,
    UserDetails,
    BranchManagement,
    BranchDetails,
    FormManagement,
    FormDetails,
    PlanManagement,
    LiveSubmissions,
    Analytics,
    Reports,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown admin component '{0}'")]
pub struct UnknownComponent(pub String);

impl AdminComponent {
    /// Identifier used in route tables and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminComponent::Dashboard => "Dashboard",
            AdminComponent::BusinessManagement => "BusinessManagement",
            AdminComponent::BusinessDetails => "BusinessDetails",
            AdminComponent::UserManagement => "UserManagement",
            AdminComponent::UserDetails => "UserDetails",
            AdminComponent::BranchManagement => "BranchManagement",
            AdminComponent::BranchDetails => "BranchDetails",
            AdminComponent::FormManagement => "FormManagement",
            AdminComponent::FormDetails => "FormDetails",
            AdminComponent::PlanManagement => "PlanManagement",
            AdminComponent::LiveSubmissions => "LiveSubmissions",
            AdminComponent::Analytics => "Analytics",
            AdminComponent::Reports => "Reports",
            AdminComponent::Settings => "Settings",
        }
    }

    /// All known components
    pub fn all() -> Vec<AdminComponent> {
        vec![
            AdminComponent::Dashboard,
            AdminComponent::BusinessManagement,
            AdminComponent::BusinessDetails,
            AdminComponent::UserManagement,
            AdminComponent::UserDetails,
            AdminComponent::BranchManagement,
            AdminComponent::BranchDetails,
            AdminComponent::FormManagement,
            AdminComponent::FormDetails,
            AdminComponent::PlanManagement,
            AdminComponent::LiveSubmissions,
            AdminComponent::Analytics,
            AdminComponent::Reports,
            AdminComponent::Settings,
        ]
    }
}

impl FromStr for AdminComponent {
    type Err = UnknownComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminComponent::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownComponent(s.to_string()))
    }
}

impl fmt::Display for AdminComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
