//! Cash session and movement rows

use shared::models::{
    CashMovement, CashSession, CashSessionStatus, CashSessionSummary, MovementDirection,
};
use shared::money::from_cents;

pub const CASH_SESSION_COLUMNS: &str = "id, opening_balance, closing_balance, responsible_id, responsible_name, status, opened_at, closed_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CashSessionRow {
    pub id: i64,
    pub opening_balance: i64,
    pub closing_balance: Option<i64>,
    pub responsible_id: i64,
    pub responsible_name: String,
    pub status: CashSessionStatus,
    pub opened_at: i64,
    pub closed_at: Option<i64>,
}

impl From<CashSessionRow> for CashSession {
    fn from(row: CashSessionRow) -> Self {
        Self {
            id: row.id,
            opening_balance: from_cents(row.opening_balance),
            closing_balance: row.closing_balance.map(from_cents),
            responsible_id: row.responsible_id,
            responsible_name: row.responsible_name,
            status: row.status,
            opened_at: row.opened_at,
            closed_at: row.closed_at,
        }
    }
}

/// Session joined with Σ IN and Σ OUT of its movements
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CashSessionTotalsRow {
    #[sqlx(flatten)]
    pub session: CashSessionRow,
    pub total_in: i64,
    pub total_out: i64,
}

impl From<CashSessionTotalsRow> for CashSessionSummary {
    fn from(row: CashSessionTotalsRow) -> Self {
        let balance = row.session.opening_balance + row.total_in - row.total_out;
        Self {
            session: row.session.into(),
            total_in: from_cents(row.total_in),
            total_out: from_cents(row.total_out),
            balance: from_cents(balance),
        }
    }
}

pub const CASH_MOVEMENT_COLUMNS: &str =
    "id, session_id, description, amount, direction, note, order_number, created_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CashMovementRow {
    pub id: i64,
    pub session_id: i64,
    pub description: String,
    pub amount: i64,
    pub direction: MovementDirection,
    pub note: Option<String>,
    pub order_number: Option<i64>,
    pub created_at: i64,
}

impl From<CashMovementRow> for CashMovement {
    fn from(row: CashMovementRow) -> Self {
        Self {
            id: row.id,
            session_id: row.session_id,
            description: row.description,
            amount: from_cents(row.amount),
            direction: row.direction,
            note: row.note,
            order_number: row.order_number,
            created_at: row.created_at,
        }
    }
}
