//! Role API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/roles", get(handler::list).post(handler::create))
        .route(
            "/api/roles/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/api/capabilities", get(handler::list_capabilities))
}
