//! Cash Session Repository
//!
//! The single-open-session rule lives in the schema
//! (`idx_cash_session_single_open`); a second `open` fails with
//! [`RepoError::Duplicate`].

use super::{RepoError, RepoResult};
use crate::db::models::{CashSessionRow, CashSessionTotalsRow};
use crate::db::models::cash::CASH_SESSION_COLUMNS;
use sqlx::SqliteExecutor;

pub async fn open(
    ex: impl SqliteExecutor<'_>,
    opening_balance: i64,
    responsible_id: i64,
    responsible_name: &str,
) -> RepoResult<CashSessionRow> {
    if opening_balance < 0 {
        return Err(RepoError::Validation(format!(
            "Opening balance cannot be negative: {opening_balance}"
        )));
    }
    let sql = format!(
        "INSERT INTO cash_session (opening_balance, responsible_id, responsible_name, status, opened_at) VALUES (?, ?, ?, 'OPEN', ?) RETURNING {CASH_SESSION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, CashSessionRow>(&sql)
        .bind(opening_balance)
        .bind(responsible_id)
        .bind(responsible_name)
        .bind(shared::util::now_millis())
        .fetch_one(ex)
        .await?;
    Ok(row)
}

pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<CashSessionRow>> {
    let sql = format!("SELECT {CASH_SESSION_COLUMNS} FROM cash_session WHERE id = ?");
    let row = sqlx::query_as::<_, CashSessionRow>(&sql)
        .bind(id)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

pub async fn find_open(ex: impl SqliteExecutor<'_>) -> RepoResult<Option<CashSessionRow>> {
    let sql = format!("SELECT {CASH_SESSION_COLUMNS} FROM cash_session WHERE status = 'OPEN'");
    let row = sqlx::query_as::<_, CashSessionRow>(&sql)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Close an open session.
///
/// Closing balance = opening + Σ IN − Σ OUT, computed in the same statement.
/// Returns `None` when the session is unknown or already closed.
pub async fn close(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<CashSessionRow>> {
    let sql = format!(
        "UPDATE cash_session SET status = 'CLOSED', closing_balance = opening_balance + (SELECT COALESCE(SUM(CASE WHEN direction = 'IN' THEN amount ELSE -amount END), 0) FROM cash_movement WHERE session_id = ?2), closed_at = ?1 WHERE id = ?2 AND status = 'OPEN' RETURNING {CASH_SESSION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, CashSessionRow>(&sql)
        .bind(shared::util::now_millis())
        .bind(id)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Sessions opened within `[start, end)` with their movement totals, newest first
pub async fn find_opened_between(
    ex: impl SqliteExecutor<'_>,
    start: Option<i64>,
    end: Option<i64>,
) -> RepoResult<Vec<CashSessionTotalsRow>> {
    let rows = sqlx::query_as::<_, CashSessionTotalsRow>(
        "SELECT s.id AS id, s.opening_balance AS opening_balance, s.closing_balance AS closing_balance, \
         s.responsible_id AS responsible_id, s.responsible_name AS responsible_name, s.status AS status, \
         s.opened_at AS opened_at, s.closed_at AS closed_at, \
         COALESCE(SUM(CASE WHEN m.direction = 'IN' THEN m.amount ELSE 0 END), 0) AS total_in, \
         COALESCE(SUM(CASE WHEN m.direction = 'OUT' THEN m.amount ELSE 0 END), 0) AS total_out \
         FROM cash_session s LEFT JOIN cash_movement m ON m.session_id = s.id \
         WHERE (?1 IS NULL OR s.opened_at >= ?1) AND (?2 IS NULL OR s.opened_at < ?2) \
         GROUP BY s.id ORDER BY s.opened_at DESC, s.id DESC",
    )
    .bind(start)
    .bind(end)
    .fetch_all(ex)
    .await?;
    Ok(rows)
}

/// First session opened within `[start, end)`
pub async fn find_first_opened_between(
    ex: impl SqliteExecutor<'_>,
    start: i64,
    end: i64,
) -> RepoResult<Option<CashSessionRow>> {
    let sql = format!(
        "SELECT {CASH_SESSION_COLUMNS} FROM cash_session WHERE opened_at >= ? AND opened_at < ? ORDER BY opened_at, id LIMIT 1"
    );
    let row = sqlx::query_as::<_, CashSessionRow>(&sql)
        .bind(start)
        .bind(end)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}
