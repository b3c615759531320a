//! Order Item Repository

use super::RepoResult;
use crate::db::models::OrderItemRow;
use crate::db::models::order::ORDER_ITEM_COLUMNS;
use shared::models::ProductType;
use sqlx::SqliteExecutor;

/// Priced line ready to persist (amounts in cents)
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub order_number: i64,
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: i64,
    pub width: Option<String>,
    pub height: Option<String>,
    pub unit_price: i64,
    pub subtotal: i64,
}

pub async fn find_by_order(
    ex: impl SqliteExecutor<'_>,
    order_number: i64,
) -> RepoResult<Vec<OrderItemRow>> {
    let sql =
        format!("SELECT {ORDER_ITEM_COLUMNS} FROM order_item WHERE order_number = ? ORDER BY id");
    let rows = sqlx::query_as::<_, OrderItemRow>(&sql)
        .bind(order_number)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}

pub async fn delete_by_order(ex: impl SqliteExecutor<'_>, order_number: i64) -> RepoResult<u64> {
    let result = sqlx::query("DELETE FROM order_item WHERE order_number = ?")
        .bind(order_number)
        .execute(ex)
        .await?;
    Ok(result.rows_affected())
}

pub async fn insert(ex: impl SqliteExecutor<'_>, item: &NewOrderItem) -> RepoResult<OrderItemRow> {
    let sql = format!(
        "INSERT INTO order_item (order_number, product_id, product_code, product_name, product_type, quantity, width, height, unit_price, subtotal) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {ORDER_ITEM_COLUMNS}"
    );
    let row = sqlx::query_as::<_, OrderItemRow>(&sql)
        .bind(item.order_number)
        .bind(item.product_id)
        .bind(&item.product_code)
        .bind(&item.product_name)
        .bind(item.product_type)
        .bind(item.quantity)
        .bind(&item.width)
        .bind(&item.height)
        .bind(item.unit_price)
        .bind(item.subtotal)
        .fetch_one(ex)
        .await?;
    Ok(row)
}
