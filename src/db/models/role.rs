//! Role Model

use serde::{Deserialize, Serialize};

use crate::auth::Capability;

/// Role entity: a named bundle of admin capabilities plus a
/// member-dashboard-access flag.
///
/// `name` is an immutable slug, set once at creation. The three core roles
/// (`admin`, `editor`, `member`) cannot be deleted and their names cannot be
/// claimed by new roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Always a subset of the capability catalog; invalid stored keys are
    /// dropped when the row is read.
    pub capabilities: Vec<Capability>,
    pub member_dashboard_access: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create role payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCreate {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// Raw keys from a multi-select; sanitized against the catalog before
    /// storage.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Known roles default open; only unresolved role names deny.
    #[serde(default = "default_true")]
    pub member_dashboard_access: bool,
}

/// Update role payload. `name` is deliberately absent: role names are
/// immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    pub member_dashboard_access: bool,
}
