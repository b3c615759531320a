//! Product Repository (inventory ledger)

use super::{RepoError, RepoResult};
use crate::db::models::ProductRow;
use crate::db::models::product::PRODUCT_COLUMNS;
use shared::models::ProductType;
use sqlx::SqliteExecutor;

/// Insert payload with the price already in cents
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub unit_price: i64,
    pub stock: i64,
    pub product_type: ProductType,
}

pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<ProductRow>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM product WHERE id = ?");
    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Resolve a product by code, falling back to name
pub async fn find_by_key(ex: impl SqliteExecutor<'_>, key: &str) -> RepoResult<Option<ProductRow>> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS} FROM product WHERE code = ?1 OR name = ?1 ORDER BY (code = ?1) DESC LIMIT 1"
    );
    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(key)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

pub async fn create(ex: impl SqliteExecutor<'_>, data: NewProduct) -> RepoResult<ProductRow> {
    if data.product_type == ProductType::MadeToOrder && data.stock != 0 {
        return Err(RepoError::Validation(
            "Made-to-order products cannot hold stock".into(),
        ));
    }
    let now = shared::util::now_millis();
    let sql = format!(
        "INSERT INTO product (id, code, name, unit_price, stock, product_type, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) RETURNING {PRODUCT_COLUMNS}"
    );
    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(shared::util::snowflake_id())
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.unit_price)
        .bind(data.stock)
        .bind(data.product_type)
        .bind(now)
        .fetch_one(ex)
        .await?;
    Ok(row)
}

/// Take `quantity` units out of stock.
///
/// Returns `false` when the product does not have enough stock; the row is
/// left untouched in that case.
pub async fn decrement_stock(
    ex: impl SqliteExecutor<'_>,
    id: i64,
    quantity: i64,
) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE product SET stock = stock - ?1, updated_at = ?2 WHERE id = ?3 AND product_type = 'STOCKED' AND stock >= ?1",
    )
    .bind(quantity)
    .bind(now)
    .bind(id)
    .execute(ex)
    .await?;
    Ok(result.rows_affected() == 1)
}

pub async fn increment_stock(ex: impl SqliteExecutor<'_>, id: i64, quantity: i64) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE product SET stock = stock + ?1, updated_at = ?2 WHERE id = ?3 AND product_type = 'STOCKED'",
    )
    .bind(quantity)
    .bind(now)
    .bind(id)
    .execute(ex)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Stocked product {id} not found")));
    }
    Ok(())
}
