//! Access resolution API Handlers
//!
//! Every other admin page gates its rendering through this endpoint. The
//! role name comes from the session/identity service; it may reference a
//! role that no longer exists, in which case the answer is "nothing".

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::auth::{Capability, resolver};
use crate::core::AppState;
use crate::utils::AppResult;

/// Effective access for one role name
#[derive(Serialize)]
pub struct AccessResponse {
    pub role: String,
    pub capabilities: Vec<Capability>,
    pub member_dashboard_access: bool,
}

/// GET /api/access/{role} - Effective capabilities and dashboard flag
pub async fn resolve(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<AccessResponse>> {
    let capabilities = resolver::resolve_capabilities(&state.pool, &role).await?;
    let member_dashboard_access =
        resolver::can_access_member_dashboard(&state.pool, &role).await?;
    Ok(Json(AccessResponse {
        role,
        capabilities,
        member_dashboard_access,
    }))
}
