use serde::{Deserialize, Serialize};

use super::component::AdminComponent;
use super::pattern::RoutePattern;
use super::registry::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl RouteMeta {
    /// Part of the title shown in navigation ("Business Management - Keephy Admin" -> "Business Management")
    pub fn short_title(&self) -> &str {
        self.title.split(" - ").next().unwrap_or(&self.title)
    }
}

/// Untyped route definition, as it appears in tables and API payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub path: String,
    pub component: String,
    pub requires_auth: bool,
    #[serde(default)]
    pub allowed_roles: Vec<String>,
    pub meta: RouteMeta,
}

/// Validated route descriptor
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    path: String,
    pattern: RoutePattern,
    component: AdminComponent,
    requires_auth: bool,
    allowed_roles: Vec<String>,
    meta: RouteMeta,
}

impl RouteDescriptor {
    pub fn new(
        path: &str,
        component: AdminComponent,
        requires_auth: bool,
        allowed_roles: Vec<String>,
        meta: RouteMeta,
    ) -> Result<Self, RegistryError> {
        let pattern = RoutePattern::parse(path).map_err(|source| RegistryError::InvalidPattern {
            path: path.to_string(),
            source,
        })?;

        let mut roles: Vec<String> = Vec::with_capacity(allowed_roles.len());
        for role in allowed_roles {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }

        Ok(Self {
            path: path.to_string(),
            pattern,
            component,
            requires_auth,
            allowed_roles: roles,
            meta,
        })
    }

    pub fn from_definition(def: RouteDefinition) -> Result<Self, RegistryError> {
        let component = def
            .component
            .parse::<AdminComponent>()
            .map_err(|_| RegistryError::UnknownComponent {
                path: def.path.clone(),
                component: def.component.clone(),
            })?;

        Self::new(
            &def.path,
            component,
            def.requires_auth,
            def.allowed_roles,
            def.meta,
        )
    }

    pub fn to_definition(&self) -> RouteDefinition {
        RouteDefinition {
            path: self.path.clone(),
            component: self.component.as_str().to_string(),
            requires_auth: self.requires_auth,
            allowed_roles: self.allowed_roles.clone(),
            meta: self.meta.clone(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn component(&self) -> AdminComponent {
        self.component
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn allowed_roles(&self) -> &[String] {
        &self.allowed_roles
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    pub fn is_parametrized(&self) -> bool {
        self.pattern.is_parametrized()
    }

    /// True if the route carries no role restriction
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_roles.is_empty()
    }

    pub fn allows_role(&self, role: &str) -> bool {
        self.allowed_roles.iter().any(|r| r == role)
    }

    /// Visibility rule shared by the navigation menu and role listings
    pub fn is_visible_to(&self, role: Option<&str>) -> bool {
        !self.requires_auth || self.is_unrestricted() || role.is_some_and(|r| self.allows_role(r))
    }
}
