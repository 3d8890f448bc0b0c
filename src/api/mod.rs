//! API routing
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`roles`] - role and capability-catalog management
//! - [`groups`] - group management
//! - [`members`] - group membership management
//! - [`access`] - capability resolution consumed by the other admin pages

pub mod access;
pub mod groups;
pub mod health;
pub mod members;
pub mod roles;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Assemble the full admin API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(roles::router())
        .merge(groups::router())
        .merge(members::router())
        .merge(access::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
