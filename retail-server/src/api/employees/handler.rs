//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::employees;
use crate::utils::AppResult;
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub include_inactive: bool,
}

/// GET /api/employees[?include_inactive=true]
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<EmployeeResponse>>> {
    Ok(Json(
        employees::list_employees(&state.pool, query.include_inactive).await?,
    ))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeResponse>> {
    Ok(Json(employees::get_employee(&state.pool, id).await?))
}

/// POST /api/employees
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = employees::create_employee(&state.pool, payload).await?;

    audit_log!(
        "employee.created",
        "employee",
        employee.id,
        operator_id = current_user.id,
        role = employee.role
    );
    Ok(Json(employee))
}

/// PUT /api/employees/{id}
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    let password_changed = payload.password.is_some();
    let employee = employees::update_employee(&state.pool, id, payload, current_user.id).await?;

    audit_log!(
        "employee.updated",
        "employee",
        id,
        operator_id = current_user.id,
        role = employee.role,
        active = employee.is_active,
        password_changed = password_changed
    );
    Ok(Json(employee))
}

/// DELETE /api/employees/{id} - deactivates; the row is kept
pub async fn deactivate(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = employees::deactivate_employee(&state.pool, id, current_user.id).await?;

    audit_log!(
        "employee.deactivated",
        "employee",
        id,
        operator_id = current_user.id
    );
    Ok(Json(employee))
}
