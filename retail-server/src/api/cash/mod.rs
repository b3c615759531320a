//! Cash API Module (sessions and movements)

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::permissions::{CASH_MANAGE, REPORTS_CASH};
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let manage_routes = Router::new()
        .route("/api/cash-sessions", post(handler::open))
        .route("/api/cash-sessions/current", get(handler::current))
        .route("/api/cash-sessions/{id}/close", post(handler::close))
        .route("/api/cash-movements", post(handler::append_movement))
        .layer(middleware::from_fn(require_permission(CASH_MANAGE)));

    // Session reports are manager only
    let report_routes = Router::new()
        .route("/api/cash-sessions/{id}/report", get(handler::report))
        .layer(middleware::from_fn(require_permission(REPORTS_CASH)));

    manage_routes.merge(report_routes)
}
