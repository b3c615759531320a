//! Client API Module
//!
//! Clients are identified by name; there is no client registry.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::permissions::{PAYMENTS_APPLY, REPORTS_VIEW};
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let payment_routes = Router::new()
        .route("/api/clients/{client_name}/payments", post(handler::apply_payment))
        .layer(middleware::from_fn(require_permission(PAYMENTS_APPLY)));

    let report_routes = Router::new()
        .route("/api/clients/{client_name}/statement", get(handler::statement))
        .layer(middleware::from_fn(require_permission(REPORTS_VIEW)));

    payment_routes.merge(report_routes)
}
