use serde::{Deserialize, Serialize};

/// Who is asking for a route.
///
/// The role is resolved upstream (identity gateway) and treated as an opaque
/// string. Only the presence of a credential is known here, never its validity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerContext {
    pub role: Option<String>,
    pub has_credential: bool,
}

impl CallerContext {
    /// Only an empty string means "no role"; anything else is kept verbatim
    pub fn new(role: Option<String>, has_credential: bool) -> Self {
        let role = role.filter(|r| !r.is_empty());
        Self {
            role,
            has_credential,
        }
    }

    /// No credential, no role
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credential present with a resolved role
    pub fn authenticated(role: impl Into<String>) -> Self {
        Self::new(Some(role.into()), true)
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
