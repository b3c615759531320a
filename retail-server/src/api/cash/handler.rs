//! Cash API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::cash;
use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CashMovement, CashMovementCreate, CashSession, CashSessionOpen, CashSessionReport};

/// POST /api/cash-sessions - open the register, caller is responsible
pub async fn open(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    payload: Option<Json<CashSessionOpen>>,
) -> AppResult<Json<CashSession>> {
    let Json(payload) = payload.unwrap_or_default();
    let session = cash::open_session(&state.pool, payload.opening_balance, current_user.id).await?;

    audit_log!(
        "cash.session_opened",
        "cash_session",
        session.id,
        operator_id = current_user.id,
        opening_balance = session.opening_balance
    );
    Ok(Json(session))
}

/// GET /api/cash-sessions/current
pub async fn current(State(state): State<ServerState>) -> AppResult<Json<Option<CashSession>>> {
    Ok(Json(cash::current_session(&state.pool).await?))
}

/// POST /api/cash-sessions/{id}/close
pub async fn close(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<CashSession>> {
    let session = cash::close_session(&state.pool, id).await?;

    audit_log!(
        "cash.session_closed",
        "cash_session",
        id,
        operator_id = current_user.id,
        closing_balance = session.closing_balance.unwrap_or_default()
    );
    Ok(Json(session))
}

/// GET /api/cash-sessions/{id}/report
pub async fn report(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CashSessionReport>> {
    Ok(Json(cash::session_report(&state.pool, id).await?))
}

/// POST /api/cash-movements
pub async fn append_movement(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<CashMovementCreate>,
) -> AppResult<Json<CashMovement>> {
    let movement = cash::append_movement(&state.pool, payload).await?;

    audit_log!(
        "cash.movement_recorded",
        "cash_session",
        movement.session_id,
        operator_id = current_user.id,
        direction = format!("{:?}", movement.direction),
        amount = movement.amount
    );
    Ok(Json(movement))
}
