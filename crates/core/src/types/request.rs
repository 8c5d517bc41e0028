use serde::{Deserialize, Serialize};

// =============================================================================
// Request Types
// =============================================================================

/// Role assumed when the caller does not supply one.
pub const DEFAULT_ROLE: &str = "user";

/// Tenant assumed when the caller does not supply one.
pub const DEFAULT_TENANT: &str = "demo";

/// Role that unlocks the analysis dashboards.
pub const DEVELOPER_ROLE: &str = "developer";

/// A single utterance to route, with the caller's context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Raw free-text utterance as typed by the user.
    pub utterance: String,

    /// Caller role, e.g. "user" or "developer".
    #[serde(default = "default_role")]
    pub role: String,

    /// Tenant identifier scoping the page namespace.
    #[serde(default = "default_tenant")]
    pub tenant: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

fn default_tenant() -> String {
    DEFAULT_TENANT.to_string()
}

impl RouteRequest {
    /// Create a request with the default role and tenant.
    pub fn text(utterance: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            role: default_role(),
            tenant: default_tenant(),
        }
    }

    /// Set the caller role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the tenant identifier.
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    /// Utterance lower-cased and trimmed; every pattern is written against this form.
    pub fn normalized(&self) -> String {
        self.utterance.trim().to_lowercase()
    }
}
