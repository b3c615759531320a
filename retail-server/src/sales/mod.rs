//! Sales
//!
//! Order lifecycle, item submission and payments. Every mutating operation
//! runs in one transaction whose first statement locks the affected orders
//! (see [`crate::db::repository::order::lock`]), so concurrent requests on
//! the same order serialize and a failed step leaves nothing behind.
//!
//! ```text
//! OPEN ──finalize──▶ COMPLETED ──unlock──▶ OPEN
//!   │                    │
//!   └──cancel──▶ CANCELLED (nothing paid) / REVERSED (money returned)
//! ```

mod items;
mod lifecycle;
mod payments;
pub mod pricing;

pub use items::submit_items;
pub use lifecycle::{cancel_order, finalize_order, open_order, unlock_order};
pub use payments::{apply_client_payment, apply_payment};

use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;

use crate::db::models::OrderRow;

pub(crate) fn order_not_found(order_number: i64) -> AppError {
    AppError::with_message(
        ErrorCode::OrderNotFound,
        format!("Order {order_number} not found"),
    )
    .with_detail("order_number", order_number)
}

pub(crate) fn ensure_open(order: &OrderRow) -> Result<(), AppError> {
    if order.status != OrderStatus::Open {
        return Err(AppError::with_message(
            ErrorCode::OrderNotOpen,
            format!(
                "Order {} is {}, expected OPEN",
                order.order_number,
                order.status.as_str()
            ),
        )
        .with_detail("order_number", order.order_number)
        .with_detail("status", order.status.as_str()));
    }
    Ok(())
}
