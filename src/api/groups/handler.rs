//! Group API Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::core::AppState;
use crate::db::models::{Group, GroupCreate, GroupSummary, GroupUpdate};
use crate::db::repository::group;
use crate::utils::{AppError, AppResult};

/// Query filter for group listing
#[derive(Debug, Deserialize)]
pub struct GroupQuery {
    /// Case-insensitive substring over name, slug and description
    search: Option<String>,
}

/// GET /api/groups - All groups with member counts
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<GroupQuery>,
) -> AppResult<Json<Vec<GroupSummary>>> {
    let groups = group::find_all(&state.pool, query.search.as_deref()).await?;
    Ok(Json(groups))
}

/// GET /api/groups/{id} - Group by ID
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Group>> {
    let g = group::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group {id} not found")))?;
    Ok(Json(g))
}

/// POST /api/groups - Create a new group
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GroupCreate>,
) -> AppResult<Json<Group>> {
    tracing::info!(group_name = %payload.name, "Creating group");
    let g = group::create(&state.pool, payload).await?;
    Ok(Json(g))
}

/// PUT /api/groups/{id} - Update a group (slug is immutable)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GroupUpdate>,
) -> AppResult<Json<Group>> {
    tracing::info!(group_id = %id, "Updating group");
    let g = group::update(&state.pool, id, payload).await?;
    Ok(Json(g))
}

/// DELETE /api/groups/{id} - Delete a group and its memberships
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    tracing::info!(group_id = %id, "Deleting group");
    group::delete(&state.pool, id).await?;
    Ok(Json(true))
}
