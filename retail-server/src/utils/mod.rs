//! Utilities
//!
//! - [`ServiceError`] / [`ServiceResult`] - service-layer errors
//! - [`validation`] - input limits and checks
//! - [`logger`] - tracing setup
//! - [`time`] - report date periods

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
