//! Role Repository
//!
//! Roles carry an immutable `name` slug; the three core roles keep their
//! identity forever (no deletion, no name reuse) while everything else about
//! them stays editable.

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::auth::{Capability, capability};
use crate::db::models::{Role, RoleCreate, RoleUpdate};
use crate::utils::now_millis;

/// Core role names: protected from deletion, reserved at creation
pub const CORE_ROLES: &[&str] = &["admin", "editor", "member"];

const ROLE_COLUMNS: &str = "id, name, display_name, description, capabilities, \
     member_dashboard_access, sort_order, created_at, updated_at";

/// Raw row shape; `capabilities` is the serialized JSON column and gets
/// sanitized against the catalog before anyone sees it.
#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i64,
    name: String,
    display_name: String,
    description: String,
    capabilities: sqlx::types::Json<Vec<String>>,
    member_dashboard_access: bool,
    sort_order: i64,
    created_at: i64,
    updated_at: i64,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            name: row.name,
            display_name: row.display_name,
            description: row.description,
            // Storage-read boundary: legacy or invalid keys are dropped here
            capabilities: capability::sanitize(&row.capabilities.0),
            member_dashboard_access: row.member_dashboard_access,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn is_valid_role_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn capabilities_json(caps: &[Capability]) -> RepoResult<String> {
    serde_json::to_string(caps).map_err(|e| RepoError::Database(e.to_string()))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Role>> {
    let rows = sqlx::query_as::<_, RoleRow>(&format!(
        "SELECT {ROLE_COLUMNS} FROM roles ORDER BY sort_order, name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Role::from).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Role>> {
    let row = sqlx::query_as::<_, RoleRow>(&format!(
        "SELECT {ROLE_COLUMNS} FROM roles WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Role::from))
}

pub async fn find_by_name(pool: &SqlitePool, name: &str) -> RepoResult<Option<Role>> {
    let row = sqlx::query_as::<_, RoleRow>(&format!(
        "SELECT {ROLE_COLUMNS} FROM roles WHERE name = ? LIMIT 1"
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Role::from))
}

pub async fn create(pool: &SqlitePool, data: RoleCreate) -> RepoResult<Role> {
    let name = data.name.trim();
    let display_name = data.display_name.trim();

    if name.is_empty() || display_name.is_empty() {
        return Err(RepoError::Validation(
            "name and display name are required".into(),
        ));
    }
    if !is_valid_role_name(name) {
        return Err(RepoError::Validation(
            "role name may only contain a-z, 0-9 and _".into(),
        ));
    }
    if CORE_ROLES.contains(&name) {
        return Err(RepoError::Protected(format!(
            "role name '{name}' is reserved for core roles"
        )));
    }
    if find_by_name(pool, name).await?.is_some() {
        return Err(RepoError::Conflict(format!(
            "role name '{name}' already taken"
        )));
    }

    let caps = capability::sanitize(&data.capabilities);
    let now = now_millis();

    // Unique index on name still backstops concurrent creates; sort_order is
    // assigned at the tail of the list.
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO roles (name, display_name, description, capabilities, \
         member_dashboard_access, sort_order, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM roles), ?, ?) \
         RETURNING id",
    )
    .bind(name)
    .bind(display_name)
    .bind(data.description.trim())
    .bind(capabilities_json(&caps)?)
    .bind(data.member_dashboard_access)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create role".into()))
}

/// Last-writer-wins full update; `name` is never touched.
pub async fn update(pool: &SqlitePool, id: i64, data: RoleUpdate) -> RepoResult<Role> {
    let display_name = data.display_name.trim();
    if display_name.is_empty() {
        return Err(RepoError::Validation("display name is required".into()));
    }

    let caps = capability::sanitize(&data.capabilities);
    let now = now_millis();

    let rows = sqlx::query(
        "UPDATE roles SET display_name = ?, description = ?, capabilities = ?, \
         member_dashboard_access = ?, updated_at = ? WHERE id = ?",
    )
    .bind(display_name)
    .bind(data.description.trim())
    .bind(capabilities_json(&caps)?)
    .bind(data.member_dashboard_access)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Role {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Role {id} not found")))?;

    if CORE_ROLES.contains(&existing.name.as_str()) {
        return Err(RepoError::Protected(format!(
            "core role '{}' cannot be deleted",
            existing.name
        )));
    }

    sqlx::query("DELETE FROM roles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// The six standard roles and their default capability sets.
///
/// (name, display name, description, capabilities, dashboard access, sort)
type SeedRole = (
    &'static str,
    &'static str,
    &'static str,
    &'static [Capability],
    bool,
    i64,
);

const SEED_ROLES: &[SeedRole] = &[
    (
        "admin",
        "Administrator",
        "Full access to the admin area",
        &Capability::ALL,
        true,
        1,
    ),
    (
        "editor",
        "Editor",
        "Manage posts, pages and media, member access",
        &[
            Capability::ManagePosts,
            Capability::ManagePages,
            Capability::ManageMedia,
        ],
        true,
        2,
    ),
    (
        "member",
        "Member",
        "Standard member access",
        &[],
        true,
        3,
    ),
    (
        "moderator",
        "Moderator",
        "Moderate posts and view analytics",
        &[
            Capability::ManagePosts,
            Capability::ManagePages,
            Capability::ViewAnalytics,
        ],
        true,
        4,
    ),
    (
        "contributor",
        "Contributor",
        "Write own posts, limited member access",
        &[Capability::ManagePosts],
        true,
        5,
    ),
    (
        "viewer",
        "Viewer",
        "Read-only access, no admin area",
        &[],
        false,
        6,
    ),
];

/// Ensure the six standard roles exist.
///
/// Insert-if-absent per role name: safe to run any number of times, and an
/// admin's customization of a standard role survives reseeding. Runs once at
/// service startup, never per request.
pub async fn seed_defaults(pool: &SqlitePool) -> RepoResult<()> {
    let now = now_millis();
    for (name, display_name, description, caps, dashboard, sort) in SEED_ROLES {
        sqlx::query(
            "INSERT INTO roles (name, display_name, description, capabilities, \
             member_dashboard_access, sort_order, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(name) DO NOTHING",
        )
        .bind(name)
        .bind(display_name)
        .bind(description)
        .bind(capabilities_json(caps)?)
        .bind(dashboard)
        .bind(sort)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    }
    Ok(())
}
