//! Cash Session Model (caixa)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cash session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashSessionStatus {
    Open,
    Closed,
}

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementDirection {
    In,
    Out,
}

/// A cash register session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashSession {
    pub id: i64,
    pub opening_balance: Decimal,
    /// Set when the session is closed
    pub closing_balance: Option<Decimal>,
    pub responsible_id: i64,
    pub responsible_name: String,
    pub status: CashSessionStatus,
    pub opened_at: i64,
    pub closed_at: Option<i64>,
}

/// Open session payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CashSessionOpen {
    #[serde(default)]
    pub opening_balance: Decimal,
}

/// Immutable ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashMovement {
    pub id: i64,
    pub session_id: i64,
    pub description: String,
    pub amount: Decimal,
    pub direction: MovementDirection,
    pub note: Option<String>,
    pub order_number: Option<i64>,
    pub created_at: i64,
}

/// Manual movement payload (change fund, withdrawal, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashMovementCreate {
    pub direction: MovementDirection,
    pub amount: Decimal,
    pub description: String,
    pub note: Option<String>,
}

/// Session with its movements and running totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashSessionReport {
    pub session: CashSession,
    pub movements: Vec<CashMovement>,
    pub total_in: Decimal,
    pub total_out: Decimal,
    /// opening + in - out
    pub balance: Decimal,
}

/// Session with its movement totals, without the movement list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashSessionSummary {
    pub session: CashSession,
    pub total_in: Decimal,
    pub total_out: Decimal,
    /// opening + in - out
    pub balance: Decimal,
}

/// Sessions opened within a period, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashSessionListing {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sessions: Vec<CashSessionSummary>,
    pub total_in: Decimal,
    pub total_out: Decimal,
    /// in - out over the listed sessions
    pub net: Decimal,
}
