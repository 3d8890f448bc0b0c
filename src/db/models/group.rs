//! Group Model

use serde::{Deserialize, Serialize};

/// User group entity. `slug` is unique and fixed at creation; `plan_id`
/// optionally links to an external subscription plan not modeled here.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub plan_id: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Group listing row with the computed membership count
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GroupSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub plan_id: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub member_count: i64,
}

fn default_true() -> bool {
    true
}

/// Create group payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCreate {
    pub name: String,
    /// Derived from `name` when empty or absent
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Update group payload. `slug` is fixed at creation and not editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupUpdate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}
