//! Payment rows

use shared::models::Payment;
use shared::money::from_cents;

pub const PAYMENT_COLUMNS: &str = "id, order_number, client_name, amount, method, created_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PaymentRow {
    pub id: i64,
    pub order_number: i64,
    pub client_name: String,
    pub amount: i64,
    pub method: String,
    pub created_at: i64,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: row.id,
            order_number: row.order_number,
            client_name: row.client_name,
            amount: from_cents(row.amount),
            method: row.method,
            created_at: row.created_at,
        }
    }
}
