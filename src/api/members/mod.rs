//! Group membership API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/groups/{id}/members", get(handler::list_members))
        .route(
            "/api/groups/{id}/members/available",
            get(handler::list_non_members),
        )
        .route(
            "/api/groups/{id}/members/{user_id}",
            post(handler::add).delete(handler::remove),
        )
}
