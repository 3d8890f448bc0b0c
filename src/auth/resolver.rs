//! Access Resolver
//!
//! Turns "this user holds role X" into effective capabilities. The user
//! directory references roles by name with no foreign key, so a role name
//! may not resolve at all (role deleted, legacy data). Every lookup here
//! fails safe: an unknown role grants nothing and has no member-dashboard
//! access.

use sqlx::SqlitePool;

use crate::auth::Capability;
use crate::db::repository::{RepoResult, role};

/// Effective capability set for a role name.
///
/// Empty when the role does not resolve (fail-safe deny). Stored
/// capabilities are already sanitized against the catalog on read.
pub async fn resolve_capabilities(
    pool: &SqlitePool,
    role_name: &str,
) -> RepoResult<Vec<Capability>> {
    let caps = role::find_by_name(pool, role_name)
        .await?
        .map(|r| r.capabilities)
        .unwrap_or_default();
    Ok(caps)
}

/// Whether the role grants a single capability.
pub async fn has_capability(
    pool: &SqlitePool,
    role_name: &str,
    capability: Capability,
) -> RepoResult<bool> {
    let caps = resolve_capabilities(pool, role_name).await?;
    Ok(caps.contains(&capability))
}

/// Whether the role grants member-dashboard access.
///
/// New roles default the flag to `true`, but an *unresolved* role name
/// answers `false` here. That asymmetry is deliberate: known roles default
/// open, unknown roles default closed.
pub async fn can_access_member_dashboard(pool: &SqlitePool, role_name: &str) -> RepoResult<bool> {
    let access = role::find_by_name(pool, role_name)
        .await?
        .map(|r| r.member_dashboard_access)
        .unwrap_or(false);
    Ok(access)
}
