//! Order rows

use rust_decimal::Decimal;
use shared::models::{Order, OrderItem, OrderStatus, PaymentStatus, ProductType};
use shared::money::from_cents;
use std::str::FromStr;

/// Column list shared by every order query
pub const ORDER_COLUMNS: &str = "order_number, client_name, seller_id, seller_name, total, paid, status, payment_status, cancel_reason, edit_unlocked, edited_after_unlock, unlock_reason, unlocked_by, unlocked_at, created_at, updated_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRow {
    pub order_number: i64,
    pub client_name: String,
    pub seller_id: i64,
    pub seller_name: String,
    /// cents
    pub total: i64,
    /// cents
    pub paid: i64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub cancel_reason: Option<String>,
    pub edit_unlocked: bool,
    pub edited_after_unlock: bool,
    pub unlock_reason: Option<String>,
    pub unlocked_by: Option<String>,
    pub unlocked_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl OrderRow {
    pub fn balance_cents(&self) -> i64 {
        (self.total - self.paid).max(0)
    }
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Self {
            order_number: row.order_number,
            client_name: row.client_name,
            seller_id: row.seller_id,
            seller_name: row.seller_name,
            total: from_cents(row.total),
            paid: from_cents(row.paid),
            status: row.status,
            payment_status: row.payment_status,
            cancel_reason: row.cancel_reason,
            edit_unlocked: row.edit_unlocked,
            edited_after_unlock: row.edited_after_unlock,
            unlock_reason: row.unlock_reason,
            unlocked_by: row.unlocked_by,
            unlocked_at: row.unlocked_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub const ORDER_ITEM_COLUMNS: &str = "id, order_number, product_id, product_code, product_name, product_type, quantity, width, height, unit_price, subtotal";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderItemRow {
    pub id: i64,
    pub order_number: i64,
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: i64,
    /// Decimal text
    pub width: Option<String>,
    /// Decimal text
    pub height: Option<String>,
    pub unit_price: i64,
    pub subtotal: i64,
}

fn parse_dimension(value: Option<String>) -> Option<Decimal> {
    value.and_then(|v| Decimal::from_str(&v).ok())
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_number: row.order_number,
            product_id: row.product_id,
            product_code: row.product_code,
            product_name: row.product_name,
            product_type: row.product_type,
            quantity: row.quantity,
            width: parse_dimension(row.width),
            height: parse_dimension(row.height),
            unit_price: from_cents(row.unit_price),
            subtotal: from_cents(row.subtotal),
        }
    }
}
