//! Employee API Module
//!
//! Staff accounts are manager only (`employees:manage`).

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::EMPLOYEES_MANAGE;
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employees", get(handler::list).post(handler::create))
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::deactivate),
        )
        .layer(middleware::from_fn(require_permission(EMPLOYEES_MANAGE)))
}
