//! Group membership API Handlers

use axum::Json;
use axum::extract::{Path, State};

use crate::core::AppState;
use crate::db::models::{GroupMember, UserRef};
use crate::db::repository::{group, member};
use crate::utils::{AppError, AppResult};

async fn require_group(state: &AppState, group_id: i64) -> AppResult<()> {
    group::find_by_id(&state.pool, group_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group {group_id} not found")))?;
    Ok(())
}

/// GET /api/groups/{id}/members - Members joined against the user directory
pub async fn list_members(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> AppResult<Json<Vec<GroupMember>>> {
    require_group(&state, group_id).await?;
    let members = member::find_members(&state.pool, group_id).await?;
    Ok(Json(members))
}

/// GET /api/groups/{id}/members/available - Directory users not yet members
pub async fn list_non_members(
    State(state): State<AppState>,
    Path(group_id): Path<i64>,
) -> AppResult<Json<Vec<UserRef>>> {
    require_group(&state, group_id).await?;
    let users = member::find_non_members(&state.pool, group_id).await?;
    Ok(Json(users))
}

/// POST /api/groups/{id}/members/{user_id} - Add a member (idempotent)
pub async fn add(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    tracing::info!(group_id = %group_id, user_id = %user_id, "Adding group member");
    member::add(&state.pool, group_id, user_id).await?;
    Ok(Json(true))
}

/// DELETE /api/groups/{id}/members/{user_id} - Remove a member (idempotent)
pub async fn remove(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    tracing::info!(group_id = %group_id, user_id = %user_id, "Removing group member");
    member::remove(&state.pool, group_id, user_id).await?;
    Ok(Json(true))
}
