use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::time::{parse_date, parse_optional_date};
use crate::{cash, reports};
use shared::models::{CashSessionListing, CashSessionReport, OrderStatus, SalesReport};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PeriodQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub status: Option<OrderStatus>,
}

/// GET /api/reports/sales?from=&to=&status=
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<SalesReport>> {
    let from = parse_optional_date(query.from.as_deref())?;
    let to = parse_optional_date(query.to.as_deref())?;
    Ok(Json(
        reports::sales_summary(&state.pool, from, to, query.status).await?,
    ))
}

/// GET /api/reports/cash-sessions?from=&to=
pub async fn cash_sessions(
    State(state): State<ServerState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<CashSessionListing>> {
    let from = parse_optional_date(query.from.as_deref())?;
    let to = parse_optional_date(query.to.as_deref())?;
    Ok(Json(cash::list_sessions(&state.pool, from, to).await?))
}

/// GET /api/reports/cash-sessions/by-date/{date}
pub async fn cash_session_by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<CashSessionReport>> {
    let date = parse_date(&date)?;
    Ok(Json(cash::session_report_by_date(&state.pool, date).await?))
}
