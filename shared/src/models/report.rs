//! Read-only report views

use super::order::{Order, OrderStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial summary over a client's open and completed orders
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total_ordered: Decimal,
    pub total_paid: Decimal,
    pub outstanding: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientStatement {
    pub client_name: String,
    /// Newest first, every status included
    pub orders: Vec<Order>,
    pub summary: ClientSummary,
}

/// Per-seller line of a [`SalesReport`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerSales {
    pub seller_id: i64,
    pub seller_name: String,
    pub order_count: i64,
    pub total: Decimal,
    pub paid: Decimal,
}

/// Orders created within a period, optionally of one status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<OrderStatus>,
    pub order_count: i64,
    pub total: Decimal,
    pub paid: Decimal,
    /// Sorted by total, highest first
    pub by_seller: Vec<SellerSales>,
    /// Newest first
    pub orders: Vec<Order>,
}
