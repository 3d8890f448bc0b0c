//! User directory read views
//!
//! The `users` table is owned by the identity service; this crate only
//! reads from it to resolve memberships.

use serde::{Deserialize, Serialize};

/// Minimal user reference from the directory
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

/// A group member joined against the user directory
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct GroupMember {
    pub user_id: i64,
    pub username: String,
    pub display_name: String,
    /// Role name as recorded in the directory; resolved through the access
    /// resolver when a capability decision is needed.
    pub role: String,
    pub joined_at: i64,
}
