//! Data models
//!
//! Shared between the server and API clients. Money is `Decimal`; the
//! server persists it as integer cents and converts at the repository edge.
//! Status enums derive `sqlx::Type` behind the `db` feature.

pub mod cash;
pub mod employee;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;

// Re-exports
pub use cash::*;
pub use employee::*;
pub use order::*;
pub use payment::*;
pub use product::*;
pub use report::*;
