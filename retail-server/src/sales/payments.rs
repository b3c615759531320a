//! Payments
//!
//! Every applied amount produces a payment row and an IN movement in the
//! open cash session, so Σ payments == order.paid and the drawer matches.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    ClientPaymentResult, MovementDirection, PaymentApplication, PaymentStatus,
};
use shared::money::from_cents;
use sqlx::{SqliteConnection, SqlitePool};

use super::{ensure_open, order_not_found};
use crate::db::models::OrderRow;
use crate::db::repository::cash_movement::{self, NewCashMovement};
use crate::db::repository::{cash_session, order, payment};
use crate::utils::ServiceResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, require_amount, require_text};

fn no_open_session() -> AppError {
    AppError::with_message(
        ErrorCode::NoOpenCashSession,
        "Payments require an open cash session",
    )
}

async fn require_open_session(conn: &mut SqliteConnection) -> ServiceResult<()> {
    if cash_session::find_open(conn).await?.is_none() {
        return Err(no_open_session().into());
    }
    Ok(())
}

/// Apply `amount` cents to a locked order and record it in the cash session
async fn apply_to_order(
    conn: &mut SqliteConnection,
    target: &OrderRow,
    amount: i64,
    method: &str,
) -> ServiceResult<PaymentApplication> {
    payment::insert(&mut *conn, target.order_number, &target.client_name, amount, method).await?;

    let paid = target.paid + amount;
    let payment_status = PaymentStatus::from_amounts(from_cents(paid), from_cents(target.total));
    order::set_paid(&mut *conn, target.order_number, paid, payment_status).await?;

    let movement = NewCashMovement {
        description: format!("Payment for order #{}", target.order_number),
        amount,
        direction: MovementDirection::In,
        note: Some(format!("Payment method: {method}")),
        order_number: Some(target.order_number),
    };
    if cash_movement::append_to_open_session(&mut *conn, &movement)
        .await?
        .is_none()
    {
        return Err(no_open_session().into());
    }

    Ok(PaymentApplication {
        order_number: target.order_number,
        applied: from_cents(amount),
        paid: from_cents(paid),
        total: from_cents(target.total),
        payment_status,
    })
}

/// Pay (part of) the outstanding balance of one open order
pub async fn apply_payment(
    pool: &SqlitePool,
    order_number: i64,
    amount: Decimal,
    method: &str,
) -> ServiceResult<PaymentApplication> {
    let amount = require_amount(amount, ErrorCode::PaymentInvalidAmount)?;
    let method = require_text(method, "method", MAX_SHORT_TEXT_LEN, ErrorCode::PaymentMethodRequired)?;

    let mut tx = pool.begin().await?;

    let target = order::lock(&mut *tx, order_number)
        .await?
        .ok_or_else(|| order_not_found(order_number))?;
    ensure_open(&target)?;

    let balance = target.balance_cents();
    if amount > balance {
        return Err(AppError::with_message(
            ErrorCode::PaymentExceedsBalance,
            format!(
                "Payment {} exceeds the outstanding balance {} of order {order_number}",
                from_cents(amount),
                from_cents(balance)
            ),
        )
        .with_detail("balance", from_cents(balance).to_string())
        .into());
    }

    require_open_session(&mut tx).await?;
    let application = apply_to_order(&mut tx, &target, amount, &method).await?;
    tx.commit().await?;

    tracing::info!(
        order_number,
        amount = %application.applied,
        method = %method,
        "Payment applied"
    );
    Ok(application)
}

/// Spread one payment over a client's open orders, oldest first.
///
/// Each order receives at most its balance; whatever cannot be applied is
/// returned as the remainder. When every open order is already settled the
/// whole amount comes back and nothing is recorded.
pub async fn apply_client_payment(
    pool: &SqlitePool,
    client_name: &str,
    amount: Decimal,
    method: &str,
) -> ServiceResult<ClientPaymentResult> {
    let client_name = require_text(client_name, "client_name", MAX_NAME_LEN, ErrorCode::ClientNameRequired)?;
    let amount = require_amount(amount, ErrorCode::PaymentInvalidAmount)?;
    let method = require_text(method, "method", MAX_SHORT_TEXT_LEN, ErrorCode::PaymentMethodRequired)?;

    let mut tx = pool.begin().await?;

    let open_orders = order::lock_open_by_client(&mut *tx, &client_name).await?;
    if open_orders.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::ClientHasNoOpenOrders,
            format!("Client {client_name} has no open orders"),
        )
        .with_detail("client_name", client_name.as_str())
        .into());
    }

    require_open_session(&mut tx).await?;

    let mut remaining = amount;
    let mut applications = Vec::new();
    for target in &open_orders {
        if remaining == 0 {
            break;
        }
        let applied = target.balance_cents().min(remaining);
        if applied == 0 {
            continue;
        }
        applications.push(apply_to_order(&mut tx, target, applied, &method).await?);
        remaining -= applied;
    }

    tx.commit().await?;

    tracing::info!(
        client = %client_name,
        amount = %from_cents(amount),
        orders = applications.len(),
        remainder = %from_cents(remaining),
        "Client payment applied"
    );

    Ok(ClientPaymentResult {
        client_name,
        applications,
        remainder: from_cents(remaining),
    })
}
