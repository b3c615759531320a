//! Product Model (inventory collaborator)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a product is priced and whether it holds stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    /// Sold from inventory, priced per unit
    Stocked,
    /// Built per order, priced per unit of area
    MadeToOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub unit_price: Decimal,
    /// Available quantity; always 0 for made-to-order products
    pub stock: i64,
    pub product_type: ProductType,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub code: String,
    pub name: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub stock: i64,
    pub product_type: ProductType,
}

/// Restock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRestock {
    pub quantity: i64,
}
