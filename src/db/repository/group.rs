//! Group Repository
//!
//! Groups gate features/plans for sets of users. Deleting a group cascades
//! to its membership rows inside one transaction; a partially-deleted group
//! is never observable.

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoError, RepoResult};
use crate::db::models::{Group, GroupCreate, GroupSummary, GroupUpdate};
use crate::utils::{now_millis, slugify};

const GROUP_COLUMNS: &str =
    "id, name, slug, description, plan_id, is_active, created_at, updated_at";

/// List groups with their membership counts, name-ordered. `search` filters
/// by case-insensitive substring over name, slug and description.
pub async fn find_all(pool: &SqlitePool, search: Option<&str>) -> RepoResult<Vec<GroupSummary>> {
    let select = "SELECT g.id, g.name, g.slug, g.description, g.plan_id, g.is_active, \
         g.created_at, g.updated_at, \
         (SELECT COUNT(*) FROM user_group_members m WHERE m.group_id = g.id) AS member_count \
         FROM user_groups g";

    let rows = match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => {
            let pattern = format!("%{term}%");
            sqlx::query_as::<_, GroupSummary>(&format!(
                "{select} WHERE (g.name LIKE ?1 OR g.slug LIKE ?1 OR g.description LIKE ?1) \
                 ORDER BY g.name"
            ))
            .bind(pattern)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, GroupSummary>(&format!("{select} ORDER BY g.name"))
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Group>> {
    let row = sqlx::query_as::<_, Group>(&format!(
        "SELECT {GROUP_COLUMNS} FROM user_groups WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Group>> {
    let row = sqlx::query_as::<_, Group>(&format!(
        "SELECT {GROUP_COLUMNS} FROM user_groups WHERE slug = ?"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: GroupCreate) -> RepoResult<Group> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("group name is required".into()));
    }

    let slug = match data.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => slugify(name),
    };
    if slug.is_empty() {
        return Err(RepoError::Validation(format!(
            "cannot derive a slug from '{name}'"
        )));
    }
    if find_by_slug(pool, &slug).await?.is_some() {
        return Err(RepoError::Conflict(format!("slug '{slug}' already taken")));
    }

    // External plan linkage; 0 and negatives mean "no plan"
    let plan_id = data.plan_id.filter(|p| *p > 0);
    let now = now_millis();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO user_groups (name, slug, description, plan_id, is_active, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(&slug)
    .bind(data.description.trim())
    .bind(plan_id)
    .bind(data.is_active)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create group".into()))
}

/// Last-writer-wins full update; the slug stays fixed at creation.
pub async fn update(pool: &SqlitePool, id: i64, data: GroupUpdate) -> RepoResult<Group> {
    let name = data.name.trim();
    if name.is_empty() {
        return Err(RepoError::Validation("group name is required".into()));
    }

    let plan_id = data.plan_id.filter(|p| *p > 0);
    let now = now_millis();

    let rows = sqlx::query(
        "UPDATE user_groups SET name = ?, description = ?, plan_id = ?, is_active = ?, \
         updated_at = ? WHERE id = ?",
    )
    .bind(name)
    .bind(data.description.trim())
    .bind(plan_id)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Group {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Group {id} not found")))
}

/// Delete a group and all of its membership rows atomically.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    delete_cascade(&mut tx, id).await?;
    tx.commit().await?;
    Ok(())
}

/// The two dependent deletes of the cascade. Split out so the whole unit can
/// run (and roll back) inside a caller-owned transaction.
pub async fn delete_cascade(tx: &mut Transaction<'_, Sqlite>, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM user_group_members WHERE group_id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    let rows = sqlx::query("DELETE FROM user_groups WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Group {id} not found")));
    }
    Ok(())
}
