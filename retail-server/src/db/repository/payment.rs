//! Payment Repository

use super::RepoResult;
use crate::db::models::PaymentRow;
use crate::db::models::payment::PAYMENT_COLUMNS;
use sqlx::SqliteExecutor;

pub async fn insert(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
    client_name: &str,
    amount: i64,
    method: &str,
) -> RepoResult<PaymentRow> {
    let sql = format!(
        "INSERT INTO payment (order_number, client_name, amount, method, created_at) VALUES (?, ?, ?, ?, ?) RETURNING {PAYMENT_COLUMNS}"
    );
    let row = sqlx::query_as::<_, PaymentRow>(&sql)
        .bind(order_number)
        .bind(client_name)
        .bind(amount)
        .bind(method)
        .bind(shared::util::now_millis())
        .fetch_one(ex)
        .await?;
    Ok(row)
}

/// Payment history of one order, in insertion order
pub async fn find_by_order(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
) -> RepoResult<Vec<PaymentRow>> {
    let sql = format!(
        "SELECT {PAYMENT_COLUMNS} FROM payment WHERE order_number = ? ORDER BY id"
    );
    let rows = sqlx::query_as::<_, PaymentRow>(&sql)
        .bind(order_number)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}
