//! Role API Handlers

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::auth::Capability;
use crate::core::AppState;
use crate::db::models::{Role, RoleCreate, RoleUpdate};
use crate::db::repository::role;
use crate::utils::{AppError, AppResult};

/// GET /api/roles - All roles, sort-order then name
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = role::find_all(&state.pool).await?;
    Ok(Json(roles))
}

/// GET /api/roles/{id} - Role by ID
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Role>> {
    let r = role::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Role {id} not found")))?;
    Ok(Json(r))
}

/// POST /api/roles - Create a new role
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RoleCreate>,
) -> AppResult<Json<Role>> {
    tracing::info!(role_name = %payload.name, "Creating role");
    let r = role::create(&state.pool, payload).await?;
    Ok(Json(r))
}

/// PUT /api/roles/{id} - Update a role (name is immutable)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> AppResult<Json<Role>> {
    tracing::info!(role_id = %id, "Updating role");
    let r = role::update(&state.pool, id, payload).await?;
    Ok(Json(r))
}

/// DELETE /api/roles/{id} - Delete a role (core roles are protected)
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    tracing::info!(role_id = %id, "Deleting role");
    role::delete(&state.pool, id).await?;
    Ok(Json(true))
}

/// One catalog entry with its display label
#[derive(Serialize)]
pub struct CapabilityEntry {
    pub key: &'static str,
    pub label: &'static str,
}

/// GET /api/capabilities - The fixed capability catalog
pub async fn list_capabilities() -> Json<Vec<CapabilityEntry>> {
    let entries = Capability::ALL
        .iter()
        .map(|c| CapabilityEntry {
            key: c.as_key(),
            label: c.label(),
        })
        .collect();
    Json(entries)
}
