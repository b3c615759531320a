//! Item submission
//!
//! Submitting items replaces the whole item set of an open order. Stock held
//! by the previous lines goes back to inventory, each new line is priced and
//! reserved, and the order total is recomputed, all in one transaction.

use shared::error::{AppError, ErrorCode};
use shared::models::{OrderItemInput, OrderItemsResult, PaymentStatus, ProductType};
use shared::money::from_cents;
use sqlx::SqlitePool;

use super::{ensure_open, order_not_found, pricing};
use crate::db::models::ProductRow;
use crate::db::repository::{order, order_item, product};
use crate::utils::ServiceResult;

fn insufficient_stock(product: &ProductRow, available: i64, requested: i64) -> AppError {
    AppError::with_message(
        ErrorCode::InsufficientStock,
        format!(
            "Insufficient stock for {}: available {available}, requested {requested}",
            product.name
        ),
    )
    .with_detail("product", product.code.clone())
    .with_detail("available", available)
    .with_detail("requested", requested)
}

/// Replace the items of an open order and recompute its total.
///
/// Fails without any effect when a product is unknown, a line is invalid,
/// stock is short, or the new total would drop below what was already paid.
pub async fn submit_items(
    pool: &SqlitePool,
    order_number: i64,
    items: &[OrderItemInput],
) -> ServiceResult<OrderItemsResult> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderItemsRequired).into());
    }

    let mut tx = pool.begin().await?;

    let current = order::lock(&mut *tx, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    ensure_open(&current)?;

    // Release whatever the previous item set was holding
    for previous in order_item::find_by_order(&mut *tx, order_number).await? {
        if previous.product_type == ProductType::Stocked {
            product::increment_stock(&mut *tx, previous.product_id, previous.quantity).await?;
        }
    }
    order_item::delete_by_order(&mut *tx, order_number).await?;

    let mut total: i64 = 0;
    for (line_no, input) in items.iter().enumerate() {
        let key = input.product.trim();
        let resolved = product::find_by_key(&mut *tx, key).await?.ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, format!("Product {key} not found"))
                .with_detail("product", key)
                .with_detail("line", line_no)
        })?;

        let line = pricing::price_line(&resolved, input).map_err(|e| e.with_detail("line", line_no))?;

        if line.product_type == ProductType::Stocked
            && !product::decrement_stock(&mut *tx, resolved.id, line.quantity).await?
        {
            // Earlier lines of this submission may already have taken some
            let available = product::find_by_id(&mut *tx, resolved.id)
                .await?
                .map(|p| p.stock)
                .unwrap_or(0);
            return Err(insufficient_stock(&resolved, available, line.quantity)
                .with_detail("line", line_no)
                .into());
        }

        total = total
            .checked_add(line.subtotal)
            .ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;
        order_item::insert(&mut *tx, &line.into_new_item(order_number, &resolved)).await?;
    }

    if total < current.paid {
        return Err(AppError::with_message(
            ErrorCode::TotalBelowPaid,
            format!(
                "New total {} is below the amount already paid {}",
                from_cents(total),
                from_cents(current.paid)
            ),
        )
        .with_detail("total", from_cents(total).to_string())
        .with_detail("paid", from_cents(current.paid).to_string())
        .into());
    }

    let payment_status = PaymentStatus::from_amounts(from_cents(current.paid), from_cents(total));
    order::set_total(&mut *tx, order_number, total, payment_status).await?;

    tx.commit().await?;

    tracing::info!(
        order_number,
        lines = items.len(),
        total = %from_cents(total),
        "Order items submitted"
    );

    Ok(OrderItemsResult {
        order_number,
        total: from_cents(total),
    })
}
