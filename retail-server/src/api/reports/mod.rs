//! Report API Module
//!
//! Period queries take `from` / `to` as `YYYY-MM-DD` (UTC days, inclusive).

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::permissions::{REPORTS_CASH, REPORTS_SALES, REPORTS_VIEW};
use crate::auth::require_permission;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let sales_routes = Router::new()
        .route("/api/reports/sales", get(handler::sales))
        .layer(middleware::from_fn(require_permission(REPORTS_SALES)));

    let listing_routes = Router::new()
        .route("/api/reports/cash-sessions", get(handler::cash_sessions))
        .layer(middleware::from_fn(require_permission(REPORTS_VIEW)));

    let cash_routes = Router::new()
        .route(
            "/api/reports/cash-sessions/by-date/{date}",
            get(handler::cash_session_by_date),
        )
        .layer(middleware::from_fn(require_permission(REPORTS_CASH)));

    sales_routes.merge(listing_routes).merge(cash_routes)
}
