//! Cash Movement Repository (append-only)

use super::RepoResult;
use crate::db::models::CashMovementRow;
use crate::db::models::cash::CASH_MOVEMENT_COLUMNS;
use shared::models::MovementDirection;
use sqlx::SqliteExecutor;

#[derive(Debug, Clone)]
pub struct NewCashMovement {
    pub description: String,
    /// cents, > 0
    pub amount: i64,
    pub direction: MovementDirection,
    pub note: Option<String>,
    pub order_number: Option<i64>,
}

/// Append a movement to the currently open session.
///
/// Resolving the session and inserting happen in one statement. Returns
/// `None` when no session is open.
pub async fn append_to_open_session(
    ex: impl SqliteExecutor<'_>,
    movement: &NewCashMovement,
) -> RepoResult<Option<CashMovementRow>> {
    let sql = format!(
        "INSERT INTO cash_movement (session_id, description, amount, direction, note, order_number, created_at) SELECT id, ?1, ?2, ?3, ?4, ?5, ?6 FROM cash_session WHERE status = 'OPEN' RETURNING {CASH_MOVEMENT_COLUMNS}"
    );
    let row = sqlx::query_as::<_, CashMovementRow>(&sql)
        .bind(&movement.description)
        .bind(movement.amount)
        .bind(movement.direction)
        .bind(&movement.note)
        .bind(movement.order_number)
        .bind(shared::util::now_millis())
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

pub async fn find_by_session(
    ex: impl SqliteExecutor<'_>,
    session_id: i64,
) -> RepoResult<Vec<CashMovementRow>> {
    let sql = format!(
        "SELECT {CASH_MOVEMENT_COLUMNS} FROM cash_movement WHERE session_id = ? ORDER BY id"
    );
    let rows = sqlx::query_as::<_, CashMovementRow>(&sql)
        .bind(session_id)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}
