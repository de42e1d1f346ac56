//! Canonical route table of the admin dashboard

use super::component::AdminComponent;
use super::descriptor::{RouteDescriptor, RouteMeta};
use super::registry::RegistryError;

pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const SUPER_ADMIN: &str = "super_admin";
    pub const MANAGER: &str = "manager";
    pub const ANALYST: &str = "analyst";
}

use roles::{ADMIN, ANALYST, MANAGER, SUPER_ADMIN};

/// Route entry in const form
pub struct StaticRoute {
    pub path: &'static str,
    pub component: AdminComponent,
    pub requires_auth: bool,
    pub allowed_roles: &'static [&'static str],
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub icon: Option<&'static str>,
}

impl StaticRoute {
    pub fn to_descriptor(&self) -> Result<RouteDescriptor, RegistryError> {
        RouteDescriptor::new(
            self.path,
            self.component,
            self.requires_auth,
            self.allowed_roles.iter().map(|r| r.to_string()).collect(),
            RouteMeta {
                title: self.title.to_string(),
                description: self.description.map(str::to_string),
                icon: self.icon.map(str::to_string),
            },
        )
    }
}

const ADMINS: &[&str] = &[ADMIN, SUPER_ADMIN];
const STAFF: &[&str] = &[ADMIN, SUPER_ADMIN, MANAGER];
const REPORTING: &[&str] = &[ADMIN, SUPER_ADMIN, MANAGER, ANALYST];

pub const ADMIN_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        component: AdminComponent::Dashboard,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Dashboard - Keephy Admin",
        description: Some("Overview of your Keephy platform"),
        icon: Some("dashboard"),
    },
    // Business
    StaticRoute {
        path: "/business",
        component: AdminComponent::BusinessManagement,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "Business Management - Keephy Admin",
        description: Some("Manage businesses and locations"),
        icon: Some("business"),
    },
    StaticRoute {
        path: "/business/:id",
        component: AdminComponent::BusinessDetails,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "Business Details - Keephy Admin",
        description: Some("View and edit business details"),
        icon: Some("business"),
    },
    // Users
    StaticRoute {
        path: "/user",
        component: AdminComponent::UserManagement,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "User Management - Keephy Admin",
        description: Some("Manage users and permissions"),
        icon: Some("user"),
    },
    StaticRoute {
        path: "/user/:id",
        component: AdminComponent::UserDetails,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "User Details - Keephy Admin",
        description: Some("View and edit user details"),
        icon: Some("user"),
    },
    // Branches
    StaticRoute {
        path: "/branch",
        component: AdminComponent::BranchManagement,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Branch Management - Keephy Admin",
        description: Some("Manage branches and locations"),
        icon: Some("branch"),
    },
    StaticRoute {
        path: "/branch/:id",
        component: AdminComponent::BranchDetails,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Branch Details - Keephy Admin",
        description: Some("View and edit branch details"),
        icon: Some("branch"),
    },
    // Forms
    StaticRoute {
        path: "/forms",
        component: AdminComponent::FormManagement,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Form Management - Keephy Admin",
        description: Some("Create and manage feedback forms"),
        icon: Some("forms"),
    },
    StaticRoute {
        path: "/forms/:id",
        component: AdminComponent::FormDetails,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Form Details - Keephy Admin",
        description: Some("View and edit form details"),
        icon: Some("forms"),
    },
    StaticRoute {
        path: "/plans",
        component: AdminComponent::PlanManagement,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "Plan Management - Keephy Admin",
        description: Some("Manage subscription plans and pricing"),
        icon: Some("plans"),
    },
    StaticRoute {
        path: "/live-submissions",
        component: AdminComponent::LiveSubmissions,
        requires_auth: true,
        allowed_roles: STAFF,
        title: "Live Submissions - Keephy Admin",
        description: Some("Monitor feedback submissions as they arrive"),
        icon: Some("submissions"),
    },
    StaticRoute {
        path: "/analytics",
        component: AdminComponent::Analytics,
        requires_auth: true,
        allowed_roles: REPORTING,
        title: "Analytics - Keephy Admin",
        description: Some("View detailed analytics and reports"),
        icon: Some("analytics"),
    },
    StaticRoute {
        path: "/reports",
        component: AdminComponent::Reports,
        requires_auth: true,
        allowed_roles: REPORTING,
        title: "Reports - Keephy Admin",
        description: Some("Generate and view reports"),
        icon: Some("reports"),
    },
    StaticRoute {
        path: "/settings",
        component: AdminComponent::Settings,
        requires_auth: true,
        allowed_roles: ADMINS,
        title: "Settings - Keephy Admin",
        description: Some("Configure platform settings"),
        icon: Some("settings"),
    },
];
