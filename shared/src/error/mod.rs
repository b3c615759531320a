//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: Coarse failure taxonomy (not found, invalid state, ...)
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::InsufficientStock)
//!     .with_detail("product", "P-001")
//!     .with_detail("available", 2);
//! assert_eq!(err.kind(), ErrorKind::InsufficientStock);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use http::ErrorKind;
pub use types::{ApiResponse, AppError, AppResult};
