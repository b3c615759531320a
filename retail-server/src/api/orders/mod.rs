//! Order API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::permissions::{ORDERS_MANAGE, ORDERS_WRITE, PAYMENTS_APPLY};
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Reading an order only needs a login
    let read_routes = Router::new().route("/api/orders/{order_number}", get(handler::get_detail));

    let write_routes = Router::new()
        .route("/api/orders", post(handler::open))
        .route("/api/orders/{order_number}/items", put(handler::submit_items))
        .layer(middleware::from_fn(require_permission(ORDERS_WRITE)));

    let manage_routes = Router::new()
        .route("/api/orders/{order_number}/finalize", post(handler::finalize))
        .route("/api/orders/{order_number}/unlock", post(handler::unlock))
        .route("/api/orders/{order_number}/cancel", post(handler::cancel))
        .layer(middleware::from_fn(require_permission(ORDERS_MANAGE)));

    let payment_routes = Router::new()
        .route("/api/orders/{order_number}/payments", post(handler::apply_payment))
        .layer(middleware::from_fn(require_permission(PAYMENTS_APPLY)));

    read_routes
        .merge(write_routes)
        .merge(manage_routes)
        .merge(payment_routes)
}
