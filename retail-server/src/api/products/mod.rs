//! Product API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::permissions::INVENTORY_MANAGE;
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new().route("/api/products/{key}", get(handler::get_by_key));

    let manage_routes = Router::new()
        .route("/api/products", post(handler::create))
        .route("/api/products/{key}/restock", post(handler::restock))
        .layer(middleware::from_fn(require_permission(INVENTORY_MANAGE)));

    read_routes.merge(manage_routes)
}
