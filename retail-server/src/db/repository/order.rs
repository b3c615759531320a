//! Order Repository
//!
//! `lock*` functions are writes that return the touched rows. Issued as the
//! first statement of a transaction they take SQLite's write lock, so every
//! other mutator of the same orders waits until commit or rollback.

use super::{RepoError, RepoResult};
use crate::db::models::OrderRow;
use crate::db::models::order::ORDER_COLUMNS;
use shared::models::{OrderStatus, PaymentStatus};
use sqlx::SqliteExecutor;

pub async fn create(
    ex: impl SqliteExecutor<'_>,
    client_name: &str,
    seller_id: i64,
    seller_name: &str,
) -> RepoResult<OrderRow> {
    let now = shared::util::now_millis();
    let sql = format!(
        "INSERT INTO sales_order (client_name, seller_id, seller_name, total, paid, status, payment_status, created_at, updated_at) VALUES (?1, ?2, ?3, 0, 0, 'OPEN', 'NOT_PAID', ?4, ?4) RETURNING {ORDER_COLUMNS}"
    );
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(client_name)
        .bind(seller_id)
        .bind(seller_name)
        .bind(now)
        .fetch_one(ex)
        .await?;
    Ok(row)
}

pub async fn find_by_number(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
) -> RepoResult<Option<OrderRow>> {
    let sql = format!("SELECT {ORDER_COLUMNS} FROM sales_order WHERE order_number = ?");
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(order_number)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Lock one order for the rest of the transaction and return its current state
pub async fn lock(ex: impl SqliteExecutor<'_>, order_number: i64) -> RepoResult<Option<OrderRow>> {
    let now = shared::util::now_millis();
    let sql = format!(
        "UPDATE sales_order SET updated_at = ?1 WHERE order_number = ?2 RETURNING {ORDER_COLUMNS}"
    );
    let row = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(now)
        .bind(order_number)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Lock every open order of a client, oldest first
pub async fn lock_open_by_client(
    ex: impl SqliteExecutor<'_>,
    client_name: &str,
) -> RepoResult<Vec<OrderRow>> {
    let now = shared::util::now_millis();
    let sql = format!(
        "UPDATE sales_order SET updated_at = ?1 WHERE client_name = ?2 AND status = 'OPEN' RETURNING {ORDER_COLUMNS}"
    );
    let mut rows = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(now)
        .bind(client_name)
        .fetch_all(ex)
        .await?;
    // RETURNING order is unspecified
    rows.sort_by_key(|r| (r.created_at, r.order_number));
    Ok(rows)
}

/// All orders of a client, newest first
pub async fn find_by_client(
    ex: impl SqliteExecutor<'_>,
    client_name: &str,
) -> RepoResult<Vec<OrderRow>> {
    let sql = format!(
        "SELECT {ORDER_COLUMNS} FROM sales_order WHERE client_name = ? ORDER BY created_at DESC, order_number DESC"
    );
    let rows = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(client_name)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}

/// Orders created within `[start, end)`, newest first; `None` leaves a side open
pub async fn find_in_period(
    ex: impl SqliteExecutor<'_>,
    start: Option<i64>,
    end: Option<i64>,
    status: Option<OrderStatus>,
) -> RepoResult<Vec<OrderRow>> {
    let sql = format!(
        "SELECT {ORDER_COLUMNS} FROM sales_order WHERE (?1 IS NULL OR created_at >= ?1) AND (?2 IS NULL OR created_at < ?2) AND (?3 IS NULL OR status = ?3) ORDER BY created_at DESC, order_number DESC"
    );
    let rows = sqlx::query_as::<_, OrderRow>(&sql)
        .bind(start)
        .bind(end)
        .bind(status)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}

fn expect_one(rows_affected: u64, order_number: i64) -> RepoResult<()> {
    if rows_affected == 0 {
        return Err(RepoError::NotFound(format!("Order {order_number} not found")));
    }
    Ok(())
}

/// Write a recomputed total; flags the edit when the order had been unlocked
pub async fn set_total(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
    total: i64,
    payment_status: PaymentStatus,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE sales_order SET total = ?1, payment_status = ?2, edited_after_unlock = CASE WHEN edit_unlocked = 1 THEN 1 ELSE edited_after_unlock END, updated_at = ?3 WHERE order_number = ?4",
    )
    .bind(total)
    .bind(payment_status)
    .bind(now)
    .bind(order_number)
    .execute(ex)
    .await?;
    expect_one(result.rows_affected(), order_number)
}

pub async fn mark_completed(ex: impl SqliteExecutor<'_>, order_number: i64) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE sales_order SET status = 'COMPLETED', edit_unlocked = 0, updated_at = ?1 WHERE order_number = ?2",
    )
    .bind(now)
    .bind(order_number)
    .execute(ex)
    .await?;
    expect_one(result.rows_affected(), order_number)
}

pub async fn mark_unlocked(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
    reason: &str,
    authorizer: &str,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE sales_order SET status = 'OPEN', edit_unlocked = 1, unlock_reason = ?1, unlocked_by = ?2, unlocked_at = ?3, updated_at = ?3 WHERE order_number = ?4",
    )
    .bind(reason)
    .bind(authorizer)
    .bind(now)
    .bind(order_number)
    .execute(ex)
    .await?;
    expect_one(result.rows_affected(), order_number)
}

/// Move to a terminal status, clearing the paid amount
pub async fn mark_cancelled(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
    status: OrderStatus,
    reason: &str,
) -> RepoResult<()> {
    if !status.is_terminal() {
        return Err(RepoError::Validation(format!(
            "{} is not a terminal status",
            status.as_str()
        )));
    }
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE sales_order SET status = ?1, paid = 0, payment_status = 'NOT_PAID', cancel_reason = ?2, updated_at = ?3 WHERE order_number = ?4",
    )
    .bind(status)
    .bind(reason)
    .bind(now)
    .bind(order_number)
    .execute(ex)
    .await?;
    expect_one(result.rows_affected(), order_number)
}

pub async fn set_paid(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
    paid: i64,
    payment_status: PaymentStatus,
) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE sales_order SET paid = ?1, payment_status = ?2, updated_at = ?3 WHERE order_number = ?4",
    )
    .bind(paid)
    .bind(payment_status)
    .bind(now)
    .bind(order_number)
    .execute(ex)
    .await?;
    expect_one(result.rows_affected(), order_number)
}
