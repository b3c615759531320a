//! Payment Model

use super::order::PaymentStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment record against one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub order_number: i64,
    pub client_name: String,
    pub amount: Decimal,
    pub method: String,
    pub created_at: i64,
}

/// Payment payload, used for both single-order and per-client payments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub amount: Decimal,
    pub method: String,
}

/// Amount applied to one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentApplication {
    pub order_number: i64,
    pub applied: Decimal,
    pub paid: Decimal,
    pub total: Decimal,
    pub payment_status: PaymentStatus,
}

/// Result of spreading a payment over a client's open orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientPaymentResult {
    pub client_name: String,
    pub applications: Vec<PaymentApplication>,
    /// Amount that could not be applied
    pub remainder: Decimal,
}
