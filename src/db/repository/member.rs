//! Membership Repository
//!
//! Many-to-many relation between the externally-owned user directory and
//! groups. Adding is insert-if-absent, removing is delete-if-present; the
//! composite primary key keeps concurrent adds down to a single row.

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{GroupMember, UserRef};
use crate::utils::now_millis;

async fn group_exists(pool: &SqlitePool, group_id: i64) -> RepoResult<bool> {
    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM user_groups WHERE id = ?")
        .bind(group_id)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

async fn user_exists(pool: &SqlitePool, user_id: i64) -> RepoResult<bool> {
    let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

/// Add a user to a group. A second add of the same pair is a no-op.
pub async fn add(pool: &SqlitePool, group_id: i64, user_id: i64) -> RepoResult<()> {
    if !group_exists(pool, group_id).await? {
        return Err(RepoError::NotFound(format!("Group {group_id} not found")));
    }
    if !user_exists(pool, user_id).await? {
        return Err(RepoError::NotFound(format!("User {user_id} not found")));
    }

    sqlx::query(
        "INSERT INTO user_group_members (user_id, group_id, joined_at) VALUES (?, ?, ?) \
         ON CONFLICT(user_id, group_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(group_id)
    .bind(now_millis())
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove a user from a group. Removing a non-member is a no-op.
pub async fn remove(pool: &SqlitePool, group_id: i64, user_id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM user_group_members WHERE user_id = ? AND group_id = ?")
        .bind(user_id)
        .bind(group_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Members of a group joined against the user directory, username-ordered.
pub async fn find_members(pool: &SqlitePool, group_id: i64) -> RepoResult<Vec<GroupMember>> {
    let rows = sqlx::query_as::<_, GroupMember>(
        "SELECT u.id AS user_id, u.username, u.display_name, u.role, m.joined_at \
         FROM user_group_members m \
         JOIN users u ON u.id = m.user_id \
         WHERE m.group_id = ? ORDER BY u.username",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Directory users not yet in the group, username-ordered. Together with
/// [`find_members`] this partitions the whole directory.
pub async fn find_non_members(pool: &SqlitePool, group_id: i64) -> RepoResult<Vec<UserRef>> {
    let rows = sqlx::query_as::<_, UserRef>(
        "SELECT id, username, display_name FROM users \
         WHERE id NOT IN (SELECT user_id FROM user_group_members WHERE group_id = ?) \
         ORDER BY username",
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
