//! Cash register (caixa)
//!
//! At most one session is open at a time; the schema enforces it with a
//! partial unique index. Movements are append-only and always land in the
//! open session.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{
    CashMovement, CashMovementCreate, CashSession, CashSessionListing, CashSessionReport,
    CashSessionSummary, MovementDirection,
};
use shared::money::{self, from_cents};
use sqlx::SqlitePool;

use crate::db::models::{CashMovementRow, CashSessionRow};
use crate::db::repository::cash_movement::{self, NewCashMovement};
use crate::db::repository::{RepoError, cash_session, employee};
use crate::utils::ServiceResult;
use crate::utils::time::{day_end_millis, day_start_millis, period_millis};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, require_amount, require_text, validate_optional_text,
};

fn session_not_found(id: i64) -> AppError {
    AppError::with_message(
        ErrorCode::CashSessionNotFound,
        format!("Cash session {id} not found"),
    )
    .with_detail("session_id", id)
}

/// Open a session with `opening_balance` in the drawer
pub async fn open_session(
    pool: &SqlitePool,
    opening_balance: Decimal,
    responsible_id: i64,
) -> ServiceResult<CashSession> {
    let opening = money::round_money(opening_balance);
    if opening < Decimal::ZERO || opening > money::MAX_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Opening balance {opening_balance} is out of range"),
        )
        .into());
    }
    let opening = money::to_cents(opening).ok_or_else(|| AppError::new(ErrorCode::ValueOutOfRange))?;

    let responsible = employee::find_by_id(pool, responsible_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("employee_id", responsible_id))?;

    let row = match cash_session::open(pool, opening, responsible.id, &responsible.name).await {
        Ok(row) => row,
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::new(ErrorCode::CashSessionAlreadyOpen).into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(session_id = row.id, opening = %from_cents(row.opening_balance), "Cash session opened");
    Ok(row.into())
}

/// Close an open session; the closing balance is computed from its movements
pub async fn close_session(pool: &SqlitePool, id: i64) -> ServiceResult<CashSession> {
    match cash_session::close(pool, id).await? {
        Some(row) => {
            tracing::info!(
                session_id = row.id,
                closing = %row.closing_balance.map(from_cents).unwrap_or_default(),
                "Cash session closed"
            );
            Ok(row.into())
        }
        None => match cash_session::find_by_id(pool, id).await? {
            Some(_) => Err(AppError::with_message(
                ErrorCode::CashSessionClosed,
                format!("Cash session {id} is already closed"),
            )
            .into()),
            None => Err(session_not_found(id).into()),
        },
    }
}

/// The open session, if any
pub async fn current_session(pool: &SqlitePool) -> ServiceResult<Option<CashSession>> {
    Ok(cash_session::find_open(pool).await?.map(Into::into))
}

/// Record a manual movement (change fund, withdrawal) in the open session
pub async fn append_movement(
    pool: &SqlitePool,
    data: CashMovementCreate,
) -> ServiceResult<CashMovement> {
    let amount = require_amount(data.amount, ErrorCode::CashMovementInvalidAmount)?;
    let description = require_text(
        &data.description,
        "description",
        MAX_SHORT_TEXT_LEN,
        ErrorCode::RequiredField,
    )?;
    validate_optional_text(&data.note, "note", MAX_NOTE_LEN)?;

    let movement = NewCashMovement {
        description,
        amount,
        direction: data.direction,
        note: shared::util::non_blank(data.note.as_deref()),
        order_number: None,
    };
    let row = cash_movement::append_to_open_session(pool, &movement)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::NoOpenCashSession))?;

    tracing::info!(
        session_id = row.session_id,
        direction = ?row.direction,
        amount = %from_cents(row.amount),
        "Cash movement recorded"
    );
    Ok(row.into())
}

/// Σ IN and Σ OUT of a movement list, in cents
pub fn movement_totals(movements: &[CashMovementRow]) -> (i64, i64) {
    movements
        .iter()
        .fold((0, 0), |(total_in, total_out), m| match m.direction {
            MovementDirection::In => (total_in + m.amount, total_out),
            MovementDirection::Out => (total_in, total_out + m.amount),
        })
}

/// Session with its movements and running balance
pub async fn session_report(pool: &SqlitePool, id: i64) -> ServiceResult<CashSessionReport> {
    let session = cash_session::find_by_id(pool, id)
        .await?
        .ok_or_else(|| session_not_found(id))?;
    build_report(pool, session).await
}

/// Report of the first session opened on `date` (UTC)
pub async fn session_report_by_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> ServiceResult<CashSessionReport> {
    let session =
        cash_session::find_first_opened_between(pool, day_start_millis(date), day_end_millis(date))
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::CashSessionNotFound,
                    format!("No cash session was opened on {date}"),
                )
                .with_detail("date", date.to_string())
            })?;
    build_report(pool, session).await
}

/// Sessions opened between `from` and `to` (inclusive days), with period totals
pub async fn list_sessions(
    pool: &SqlitePool,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> ServiceResult<CashSessionListing> {
    let (start, end) = period_millis(from, to)?;
    let rows = cash_session::find_opened_between(pool, start, end).await?;

    let (total_in, total_out) = rows
        .iter()
        .fold((0, 0), |(i, o), r| (i + r.total_in, o + r.total_out));
    let sessions: Vec<CashSessionSummary> = rows.into_iter().map(Into::into).collect();

    Ok(CashSessionListing {
        from,
        to,
        sessions,
        total_in: from_cents(total_in),
        total_out: from_cents(total_out),
        net: from_cents(total_in - total_out),
    })
}

async fn build_report(pool: &SqlitePool, session: CashSessionRow) -> ServiceResult<CashSessionReport> {
    let movements = cash_movement::find_by_session(pool, session.id).await?;

    let (total_in, total_out) = movement_totals(&movements);
    let balance = session.opening_balance + total_in - total_out;

    Ok(CashSessionReport {
        session: session.into(),
        movements: movements.into_iter().map(Into::into).collect(),
        total_in: from_cents(total_in),
        total_out: from_cents(total_out),
        balance: from_cents(balance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(direction: MovementDirection, amount: i64) -> CashMovementRow {
        CashMovementRow {
            id: 0,
            session_id: 1,
            description: "test".into(),
            amount,
            direction,
            note: None,
            order_number: None,
            created_at: 0,
        }
    }

    #[test]
    fn totals_split_by_direction() {
        let movements = vec![
            movement(MovementDirection::In, 5000),
            movement(MovementDirection::Out, 1200),
            movement(MovementDirection::In, 250),
        ];
        assert_eq!(movement_totals(&movements), (5250, 1200));
    }

    #[test]
    fn totals_of_empty_session_are_zero() {
        assert_eq!(movement_totals(&[]), (0, 0));
    }
}
