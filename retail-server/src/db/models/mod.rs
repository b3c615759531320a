//! Database Models
//!
//! Row types as stored in SQLite (money in integer cents). Each row converts
//! into its `shared::models` API type with `From`.

pub mod cash;
pub mod employee;
pub mod order;
pub mod payment;
pub mod product;

pub use cash::{CashMovementRow, CashSessionRow, CashSessionTotalsRow};
pub use employee::EmployeeRow;
pub use order::{OrderItemRow, OrderRow};
pub use payment::PaymentRow;
pub use product::ProductRow;
