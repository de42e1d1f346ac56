//! Route authorization registry
//!
//! Built once from a route table and never mutated. Every validation call
//! returns its own [`RouteValidation`]; nothing accumulates between calls.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use super::component::AdminComponent;
use super::descriptor::{RouteDefinition, RouteDescriptor};
use super::issue::RouteIssue;
use super::pattern::PatternError;
use super::response::{NavigationItem, RouteValidation, ValidateAllRoutesResponse};
use super::table::{StaticRoute, ADMIN_ROUTES};
use crate::system::auth::CallerContext;

/// Defects of a route table detected while building the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("route {path}: unknown component '{component}'")]
    UnknownComponent { path: String, component: String },

    #[error("route {path}: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: PatternError,
    },

    #[error("route {path} is declared more than once")]
    DuplicatePath { path: String },
}

/// Descriptor matched by a concrete path
#[derive(Debug, Clone)]
pub struct RouteMatch<'r> {
    pub route: &'r RouteDescriptor,
    /// Value of the placeholder segment for parametrized routes
    pub param: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
    /// Views the host has actually mounted
    registered: BTreeSet<AdminComponent>,
}

impl RouteRegistry {
    /// Registry over the canonical admin route table
    pub fn admin() -> Result<Self, RegistryError> {
        Self::from_static(ADMIN_ROUTES)
    }

    pub fn from_static(table: &[StaticRoute]) -> Result<Self, RegistryError> {
        let routes = table
            .iter()
            .map(StaticRoute::to_descriptor)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(routes)
    }

    pub fn from_definitions(defs: Vec<RouteDefinition>) -> Result<Self, RegistryError> {
        let routes = defs
            .into_iter()
            .map(RouteDescriptor::from_definition)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(routes)
    }

    /// Every component referenced by the table counts as registered
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RegistryError> {
        let mut shapes = HashSet::new();
        for route in &routes {
            if !shapes.insert(route.pattern().shape()) {
                return Err(RegistryError::DuplicatePath {
                    path: route.path().to_string(),
                });
            }
        }

        let registered = routes.iter().map(RouteDescriptor::component).collect();
        Ok(Self { routes, registered })
    }

    /// Replace the set of mounted views
    pub fn with_registered_components(
        mut self,
        components: impl IntoIterator<Item = AdminComponent>,
    ) -> Self {
        self.registered = components.into_iter().collect();
        self
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    pub fn registered_components(&self) -> &BTreeSet<AdminComponent> {
        &self.registered
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a concrete path.
    ///
    /// Literal routes win over parametrized ones; within each group the table
    /// order decides.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        if let Some(route) = self
            .routes
            .iter()
            .find(|r| r.pattern().matches_exactly(path))
        {
            return Some(RouteMatch { route, param: None });
        }

        self.routes.iter().find_map(|route| {
            route.pattern().capture(path).map(|value| RouteMatch {
                route,
                param: Some(value.to_string()),
            })
        })
    }

    /// Check whether `caller` may navigate to `path`.
    ///
    /// An unknown path yields a single `RouteNotFound` issue. Otherwise every
    /// check runs and all findings are returned.
    pub fn validate_route(&self, path: &str, caller: &CallerContext) -> RouteValidation {
        let Some(found) = self.find(path) else {
            return RouteValidation::from_issues(vec![RouteIssue::RouteNotFound {
                path: path.to_string(),
            }]);
        };

        let route = found.route;
        let mut issues = Vec::new();

        if !self.registered.contains(&route.component()) {
            issues.push(RouteIssue::ComponentNotRegistered {
                component: route.component(),
            });
        }

        if route.requires_auth() && !caller.has_credential {
            issues.push(RouteIssue::AuthenticationRequired {
                path: path.to_string(),
            });
        }

        if let Some(role) = caller.role() {
            if !route.is_unrestricted() && !route.allows_role(role) {
                issues.push(RouteIssue::InsufficientRole {
                    role: role.to_string(),
                    route: route.path().to_string(),
                });
            }
        }

        if route.meta().title.trim().is_empty() {
            issues.push(RouteIssue::MissingMetadata {
                route: route.path().to_string(),
            });
        }

        RouteValidation::from_issues(issues)
    }

    pub fn can_access_route(&self, path: &str, caller: &CallerContext) -> bool {
        self.validate_route(path, caller).is_valid
    }

    /// Validate every descriptor against its own path, in table order
    pub fn validate_all_routes(&self, caller: &CallerContext) -> ValidateAllRoutesResponse {
        let mut errors = Vec::new();
        let mut valid_routes = 0;

        for route in &self.routes {
            let validation = self.validate_route(route.path(), caller);
            if validation.is_valid {
                valid_routes += 1;
            } else {
                errors.extend(validation.errors());
            }
        }

        ValidateAllRoutesResponse {
            total_routes: self.routes.len(),
            valid_routes,
            errors,
        }
    }

    /// Routes a role may see, parametrized ones included
    pub fn routes_for_role(&self, role: Option<&str>) -> Vec<&RouteDescriptor> {
        self.routes
            .iter()
            .filter(|r| r.is_visible_to(role))
            .collect()
    }

    /// Sidebar entries for a role: visible, non-parametrized routes in table order
    pub fn navigation_menu(&self, role: Option<&str>) -> Vec<NavigationItem> {
        self.routes
            .iter()
            .filter(|r| r.is_visible_to(role))
            .filter(|r| !r.is_parametrized())
            .map(|r| NavigationItem {
                path: r.path().to_string(),
                title: r.meta().short_title().to_string(),
                icon: r.meta().icon.clone(),
                description: r.meta().description.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::routes::descriptor::RouteMeta;
    use crate::system::routes::issue::IssueKind;
    use crate::system::routes::table::roles;

    const SOME_ROLES: &[&str] = &[
        "admin",
        "super_admin",
        "manager",
        "analyst",
        "staff",
        "billing",
        "   ",
        " admin ",
        "admin\t",
        "Admin",
    ];

    fn registry() -> RouteRegistry {
        RouteRegistry::admin().unwrap()
    }

    fn def(path: &str, component: &str, requires_auth: bool, roles: &[&str], title: &str) -> RouteDefinition {
        RouteDefinition {
            path: path.to_string(),
            component: component.to_string(),
            requires_auth,
            allowed_roles: roles.iter().map(|r| r.to_string()).collect(),
            meta: RouteMeta {
                title: title.to_string(),
                description: None,
                icon: None,
            },
        }
    }

    #[test]
    fn test_canonical_table_builds() {
        let registry = registry();
        assert_eq!(registry.len(), ADMIN_ROUTES.len());
        assert!(registry.routes().iter().all(|r| !r.meta().title.is_empty()));
    }

    #[test]
    fn test_business_example() {
        let registry = registry();

        let manager = registry.validate_route("/business", &CallerContext::authenticated("manager"));
        assert!(!manager.is_valid);
        assert_eq!(manager.issues.len(), 1);
        assert_eq!(manager.issues[0].kind(), IssueKind::InsufficientRole);
        assert_eq!(
            manager.errors(),
            vec!["User role manager not authorized for route /business".to_string()]
        );

        let admin = registry.validate_route("/business", &CallerContext::authenticated("admin"));
        assert!(admin.is_valid);
        assert!(admin.issues.is_empty());

        let menu = registry.navigation_menu(Some("admin"));
        let business = menu.iter().find(|m| m.path == "/business").unwrap();
        assert_eq!(business.title, "Business Management");
        assert_eq!(business.icon.as_deref(), Some("business"));
        assert_eq!(
            business.description.as_deref(),
            Some("Manage businesses and locations")
        );
    }

    #[test]
    fn test_auth_required_without_credential() {
        let registry = registry();
        for route in registry.routes().iter().filter(|r| r.requires_auth()) {
            for caller in [
                CallerContext::anonymous(),
                CallerContext::new(Some("admin".into()), false),
            ] {
                let result = registry.validate_route(route.path(), &caller);
                assert!(!result.is_valid, "{} allowed without credential", route.path());
                assert!(result.has(IssueKind::AuthenticationRequired));
            }
        }
    }

    #[test]
    fn test_role_membership() {
        let registry = registry();
        for route in registry.routes().iter().filter(|r| !r.is_unrestricted()) {
            for role in SOME_ROLES {
                let result =
                    registry.validate_route(route.path(), &CallerContext::authenticated(*role));
                if route.allows_role(role) {
                    assert!(!result.has(IssueKind::InsufficientRole));
                    assert!(result.is_valid);
                } else {
                    assert!(!result.is_valid);
                    assert!(result.has(IssueKind::InsufficientRole));
                }
            }
        }
    }

    #[test]
    fn test_non_canonical_roles_are_denied() {
        let registry = registry();
        for role in ["   ", " admin ", "admin\t", "\u{00a0}admin"] {
            let caller = CallerContext::new(Some(role.to_string()), true);
            let result = registry.validate_route("/business", &caller);
            assert!(!result.is_valid, "{role:?} allowed on /business");
            assert!(result.has(IssueKind::InsufficientRole));
            assert!(!registry.can_access_route("/settings", &caller));
            assert!(registry.navigation_menu(Some(role)).is_empty());
        }
    }

    #[test]
    fn test_unknown_path_has_single_issue() {
        let registry = registry();
        let callers = [
            CallerContext::anonymous(),
            CallerContext::authenticated("admin"),
            CallerContext::authenticated("nobody"),
        ];
        for caller in callers {
            let result = registry.validate_route("/nonexistent-path", &caller);
            assert!(!result.is_valid);
            assert_eq!(
                result.issues,
                vec![RouteIssue::RouteNotFound {
                    path: "/nonexistent-path".to_string()
                }]
            );
        }
    }

    #[test]
    fn test_checks_accumulate() {
        let registry = RouteRegistry::from_definitions(vec![def(
            "/reports",
            "Reports",
            true,
            &["analyst"],
            "",
        )])
        .unwrap()
        .with_registered_components([AdminComponent::Dashboard]);

        let result = registry.validate_route("/reports", &CallerContext::new(Some("manager".into()), false));
        let kinds: Vec<IssueKind> = result.issues.iter().map(RouteIssue::kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::ComponentNotRegistered,
                IssueKind::AuthenticationRequired,
                IssueKind::InsufficientRole,
                IssueKind::MissingMetadata,
            ]
        );
    }

    #[test]
    fn test_no_role_skips_role_check() {
        let registry = registry();
        let caller = CallerContext::new(None, true);
        assert!(registry.validate_route("/settings", &caller).is_valid);
    }

    #[test]
    fn test_parametrized_lookup() {
        let registry = registry();
        let caller = CallerContext::authenticated(roles::MANAGER);

        let found = registry.find("/branch/17").unwrap();
        assert_eq!(found.route.path(), "/branch/:id");
        assert_eq!(found.param.as_deref(), Some("17"));
        assert!(registry.can_access_route("/branch/17", &caller));
        assert!(registry.can_access_route("/branch/b_9x", &caller));

        assert!(!registry.can_access_route("/business/42", &caller));
        assert!(registry.can_access_route("/business/42", &CallerContext::authenticated(roles::ADMIN)));

        let nested = registry.validate_route("/business/42/edit", &caller);
        assert_eq!(nested.issues.len(), 1);
        assert!(nested.has(IssueKind::RouteNotFound));
        assert!(registry.find("/business/").is_none());
    }

    #[test]
    fn test_literal_wins_over_parametrized() {
        let registry = RouteRegistry::from_definitions(vec![
            def("/forms/:id", "FormDetails", true, &[], "Form Details"),
            def("/forms/new", "FormManagement", true, &[], "New Form"),
        ])
        .unwrap();
        let found = registry.find("/forms/new").unwrap();
        assert_eq!(found.route.component(), AdminComponent::FormManagement);
        assert!(found.param.is_none());
    }

    #[test]
    fn test_menu_excludes_parametrized_and_foreign_routes() {
        let registry = registry();
        let mut roles: Vec<Option<&str>> = SOME_ROLES.iter().map(|r| Some(*r)).collect();
        roles.push(None);

        for role in roles {
            for item in registry.navigation_menu(role) {
                assert!(!item.path.contains(':'));
                let found = registry.find(&item.path).unwrap();
                assert!(!found.route.is_parametrized());
                if !found.route.is_unrestricted() {
                    assert!(role.is_some_and(|r| found.route.allows_role(r)));
                }
            }
        }
    }

    #[test]
    fn test_menu_for_roles() {
        let registry = registry();

        let analyst: Vec<String> = registry
            .navigation_menu(Some("analyst"))
            .into_iter()
            .map(|i| i.path)
            .collect();
        assert_eq!(analyst, vec!["/analytics", "/reports"]);

        let manager: Vec<String> = registry
            .navigation_menu(Some("manager"))
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(
            manager,
            vec![
                "Dashboard",
                "Branch Management",
                "Form Management",
                "Live Submissions",
                "Analytics",
                "Reports"
            ]
        );

        assert!(registry.navigation_menu(None).is_empty());
    }

    #[test]
    fn test_menu_includes_public_and_unrestricted_routes() {
        let registry = RouteRegistry::from_definitions(vec![
            def("/", "Dashboard", false, &["admin"], "Dashboard - Keephy Admin"),
            def("/reports", "Reports", true, &[], "Reports"),
            def("/settings", "Settings", true, &["admin"], "Settings"),
        ])
        .unwrap();
        let paths: Vec<String> = registry
            .navigation_menu(None)
            .into_iter()
            .map(|i| i.path)
            .collect();
        assert_eq!(paths, vec!["/", "/reports"]);
    }

    #[test]
    fn test_routes_for_role_includes_parametrized() {
        let registry = registry();
        let paths: Vec<&str> = registry
            .routes_for_role(Some("admin"))
            .into_iter()
            .map(RouteDescriptor::path)
            .collect();
        assert!(paths.contains(&"/business/:id"));
        assert_eq!(paths.len(), registry.len());

        let analyst: Vec<&str> = registry
            .routes_for_role(Some("analyst"))
            .into_iter()
            .map(RouteDescriptor::path)
            .collect();
        assert_eq!(analyst, vec!["/analytics", "/reports"]);
    }

    #[test]
    fn test_validate_all_sums_individual_results() {
        let registry = RouteRegistry::from_definitions(vec![
            def("/", "Dashboard", true, &["admin", "manager"], "Dashboard"),
            def("/business", "BusinessManagement", true, &["admin"], ""),
            def("/business/:id", "BusinessDetails", true, &["admin"], "Business Details"),
            def("/reports", "Reports", false, &[], "Reports"),
        ])
        .unwrap()
        .with_registered_components([
            AdminComponent::Dashboard,
            AdminComponent::BusinessManagement,
            AdminComponent::Reports,
        ]);

        let callers = [
            CallerContext::anonymous(),
            CallerContext::authenticated("admin"),
            CallerContext::authenticated("manager"),
            CallerContext::new(Some("analyst".into()), false),
        ];

        for caller in callers {
            let summary = registry.validate_all_routes(&caller);
            let individual: Vec<RouteValidation> = registry
                .routes()
                .iter()
                .map(|r| registry.validate_route(r.path(), &caller))
                .collect();

            let expected_errors: Vec<String> =
                individual.iter().flat_map(RouteValidation::errors).collect();
            let invalid = individual.iter().filter(|v| !v.is_valid).count();

            assert_eq!(summary.total_routes, 4);
            assert_eq!(summary.errors, expected_errors);
            assert_eq!(summary.valid_routes + invalid, summary.total_routes);
        }

        let admin = registry.validate_all_routes(&CallerContext::authenticated("admin"));
        assert_eq!(admin.valid_routes, 2);
        assert_eq!(
            admin.errors,
            vec![
                "Admin route /business missing required meta title".to_string(),
                "Admin component BusinessDetails not found or not properly exported".to_string(),
            ]
        );
    }

    #[test]
    fn test_canonical_table_is_valid_for_admin() {
        let summary = registry().validate_all_routes(&CallerContext::authenticated("admin"));
        assert_eq!(summary.valid_routes, summary.total_routes);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let registry = registry();
        let caller = CallerContext::authenticated("manager");
        for path in ["/", "/business", "/branch/3", "/missing"] {
            assert_eq!(
                registry.validate_route(path, &caller),
                registry.validate_route(path, &caller)
            );
        }

        // A failing call leaves nothing behind for the next one
        assert!(!registry.validate_route("/settings", &CallerContext::anonymous()).is_valid);
        assert!(registry
            .validate_route("/settings", &CallerContext::authenticated("admin"))
            .is_valid);
    }

    #[test]
    fn test_construction_errors() {
        let unknown = RouteRegistry::from_definitions(vec![def("/x", "Nope", true, &[], "X")]);
        assert_eq!(
            unknown.unwrap_err(),
            RegistryError::UnknownComponent {
                path: "/x".to_string(),
                component: "Nope".to_string()
            }
        );

        let duplicate = RouteRegistry::from_definitions(vec![
            def("/user/:id", "UserDetails", true, &[], "User"),
            def("/user/:slug", "UserManagement", true, &[], "User"),
        ]);
        assert!(matches!(
            duplicate.unwrap_err(),
            RegistryError::DuplicatePath { .. }
        ));

        let malformed =
            RouteRegistry::from_definitions(vec![def("/a/:x/:y", "Dashboard", true, &[], "A")]);
        assert_eq!(
            malformed.unwrap_err().to_string(),
            "route /a/:x/:y: only one placeholder segment is supported"
        );
    }
}
