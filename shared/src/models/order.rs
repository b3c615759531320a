//! Sales Order Model

use super::payment::Payment;
use super::product::ProductType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order
///
/// `Cancelled` and `Reversed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Open,
    Completed,
    Cancelled,
    Reversed,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Reversed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Reversed => "REVERSED",
        }
    }
}

/// Payment status, tracked independently from [`OrderStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    NotPaid,
    PartiallyPaid,
    Paid,
}

impl PaymentStatus {
    /// Derive the payment status from amounts already applied
    pub fn from_amounts(paid: Decimal, total: Decimal) -> Self {
        if paid <= Decimal::ZERO {
            Self::NotPaid
        } else if paid >= total {
            Self::Paid
        } else {
            Self::PartiallyPaid
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_number: i64,
    pub client_name: String,
    pub seller_id: i64,
    pub seller_name: String,
    pub total: Decimal,
    pub paid: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub cancel_reason: Option<String>,
    /// Edit was authorized after completion
    pub edit_unlocked: bool,
    /// Items were resubmitted after an unlock
    pub edited_after_unlock: bool,
    pub unlock_reason: Option<String>,
    pub unlocked_by: Option<String>,
    pub unlocked_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    /// Amount still owed on this order
    pub fn balance(&self) -> Decimal {
        (self.total - self.paid).max(Decimal::ZERO)
    }
}

/// Persisted line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_number: i64,
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub product_type: ProductType,
    pub quantity: i64,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
    /// Price captured at submission time
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Open order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOpen {
    pub client_name: String,
}

/// One requested line, resolved against the catalog on submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    /// Product code or name
    pub product: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    pub width: Option<Decimal>,
    pub height: Option<Decimal>,
}

fn default_quantity() -> i64 {
    1
}

/// Full replacement of an order's items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemsSubmit {
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemsResult {
    pub order_number: i64,
    pub total: Decimal,
}

/// Unlock a completed order for editing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUnlock {
    pub reason: String,
    /// Person who authorized the unlock
    pub authorizer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancel {
    pub reason: String,
}

/// Order with its items and payment history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}
