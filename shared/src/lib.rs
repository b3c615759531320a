//! Shared types for the retail backend
//!
//! Error system, API models, money helpers and small utilities used by the
//! server and by API clients.

pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
