//! HTTP API
//!
//! - [`health`] - liveness and DB ping
//! - [`auth`] - login and current user
//! - [`orders`] - order lifecycle, items and payments
//! - [`clients`] - payments by client and statements
//! - [`cash`] - cash sessions and movements
//! - [`products`] - inventory lookup, creation and restock
//! - [`employees`] - staff accounts
//! - [`reports`] - sales and cash reports by period

pub mod auth;
pub mod cash;
pub mod clients;
pub mod employees;
pub mod health;
pub mod orders;
pub mod products;
pub mod reports;

use std::time::Duration;

use axum::{Router, middleware};
use http::StatusCode;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

pub use crate::utils::AppResult;

async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms",
        method,
        uri,
        response.status(),
        started.elapsed().as_millis()
    );

    response
}

/// All API routes, before state and global layers
pub fn router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(orders::router())
        .merge(clients::router())
        .merge(cash::router())
        .merge(products::router())
        .merge(employees::router())
        .merge(reports::router())
}

/// Complete application: routes, authentication, CORS, compression,
/// request timeout and access log
pub fn build_app(state: &ServerState) -> Router {
    router()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_millis(state.config.request_timeout_ms),
        ))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
