//! Order lifecycle: open, finalize, unlock, cancel

use shared::error::{AppError, ErrorCode};
use shared::models::{MovementDirection, Order, OrderStatus, ProductType};
use sqlx::{SqliteConnection, SqlitePool};

use super::{ensure_open, order_not_found};
use crate::db::repository::cash_movement::{self, NewCashMovement};
use crate::db::repository::{employee, order, order_item, product};
use crate::utils::ServiceResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, require_text};

/// Open a new order for `client_name`, attributed to the seller
pub async fn open_order(pool: &SqlitePool, client_name: &str, seller_id: i64) -> ServiceResult<Order> {
    let client_name = require_text(client_name, "client_name", MAX_NAME_LEN, ErrorCode::ClientNameRequired)?;

    let seller = employee::find_by_id(pool, seller_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("employee_id", seller_id))?;

    let row = order::create(pool, &client_name, seller.id, &seller.name).await?;
    tracing::info!(order_number = row.order_number, client = %row.client_name, "Order opened");
    Ok(row.into())
}

/// Re-read an order inside the transaction after it was modified
async fn reload(conn: &mut SqliteConnection, order_number: i64) -> ServiceResult<Order> {
    let row = order::find_by_number(conn, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    Ok(row.into())
}

/// Put every stocked unit held by the order back into inventory
async fn release_stock(conn: &mut SqliteConnection, order_number: i64) -> ServiceResult<()> {
    for item in order_item::find_by_order(&mut *conn, order_number).await? {
        if item.product_type == ProductType::Stocked {
            product::increment_stock(&mut *conn, item.product_id, item.quantity).await?;
        }
    }
    Ok(())
}

/// OPEN → COMPLETED. The order must have at least one item.
pub async fn finalize_order(pool: &SqlitePool, order_number: i64) -> ServiceResult<Order> {
    let mut tx = pool.begin().await?;

    let current = order::lock(&mut *tx, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    ensure_open(&current)?;

    if order_item::find_by_order(&mut *tx, order_number).await?.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            format!("Order {order_number} has no items"),
        )
        .with_detail("order_number", order_number)
        .into());
    }

    order::mark_completed(&mut *tx, order_number).await?;
    let finalized = reload(&mut tx, order_number).await?;
    tx.commit().await?;

    tracing::info!(order_number, total = %finalized.total, "Order finalized");
    Ok(finalized)
}

/// COMPLETED → OPEN for an authorized edit.
///
/// Records who authorized it and why; a later item submission marks the
/// order as edited after unlock.
pub async fn unlock_order(
    pool: &SqlitePool,
    order_number: i64,
    reason: &str,
    authorizer: &str,
) -> ServiceResult<Order> {
    let reason = require_text(reason, "reason", MAX_NOTE_LEN, ErrorCode::ReasonRequired)?;
    let authorizer = require_text(authorizer, "authorizer", MAX_NAME_LEN, ErrorCode::RequiredField)?;

    let mut tx = pool.begin().await?;

    let current = order::lock(&mut *tx, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    if current.status != OrderStatus::Completed {
        return Err(AppError::with_message(
            ErrorCode::OrderNotCompleted,
            format!(
                "Order {order_number} is {}, only COMPLETED orders can be unlocked",
                current.status.as_str()
            ),
        )
        .with_detail("status", current.status.as_str())
        .into());
    }

    order::mark_unlocked(&mut *tx, order_number, &reason, &authorizer).await?;
    let unlocked = reload(&mut tx, order_number).await?;
    tx.commit().await?;

    tracing::info!(order_number, authorizer = %authorizer, "Order unlocked for editing");
    Ok(unlocked)
}

/// Cancel an order.
///
/// - OPEN with nothing paid: `CANCELLED`, stock restored.
/// - OPEN or COMPLETED with payments: `REVERSED`, stock restored and the
///   paid amount leaves the open cash session as an OUT movement.
/// - COMPLETED with nothing paid must be unlocked first.
pub async fn cancel_order(pool: &SqlitePool, order_number: i64, reason: &str) -> ServiceResult<Order> {
    let reason = require_text(reason, "reason", MAX_NOTE_LEN, ErrorCode::ReasonRequired)?;

    let mut tx = pool.begin().await?;

    let current = order::lock(&mut *tx, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;

    let target = match (current.status, current.paid > 0) {
        (OrderStatus::Cancelled | OrderStatus::Reversed, _) => {
            return Err(AppError::with_message(
                ErrorCode::OrderAlreadyClosed,
                format!("Order {order_number} is already {}", current.status.as_str()),
            )
            .with_detail("status", current.status.as_str())
            .into());
        }
        (OrderStatus::Completed, false) => {
            return Err(AppError::new(ErrorCode::OrderCancelRequiresUnlock)
                .with_detail("order_number", order_number)
                .into());
        }
        (OrderStatus::Open, false) => OrderStatus::Cancelled,
        (OrderStatus::Open | OrderStatus::Completed, true) => OrderStatus::Reversed,
    };

    release_stock(&mut tx, order_number).await?;

    if target == OrderStatus::Reversed {
        let refund = NewCashMovement {
            description: format!("Reversal of order #{order_number}"),
            amount: current.paid,
            direction: MovementDirection::Out,
            note: Some(reason.clone()),
            order_number: Some(order_number),
        };
        if cash_movement::append_to_open_session(&mut *tx, &refund)
            .await?
            .is_none()
        {
            return Err(AppError::with_message(
                ErrorCode::NoOpenCashSession,
                "Reversing a paid order requires an open cash session",
            )
            .into());
        }
    }

    order::mark_cancelled(&mut *tx, order_number, target, &reason).await?;
    let cancelled = reload(&mut tx, order_number).await?;
    tx.commit().await?;

    tracing::info!(
        order_number,
        status = cancelled.status.as_str(),
        refunded = %shared::money::from_cents(current.paid),
        "Order cancelled"
    );
    Ok(cancelled)
}
