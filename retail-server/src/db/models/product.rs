//! Product rows

use shared::models::{Product, ProductType};
use shared::money::from_cents;

pub const PRODUCT_COLUMNS: &str =
    "id, code, name, unit_price, stock, product_type, created_at, updated_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub unit_price: i64,
    pub stock: i64,
    pub product_type: ProductType,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            name: row.name,
            unit_price: from_cents(row.unit_price),
            stock: row.stock,
            product_type: row.product_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
