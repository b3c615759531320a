//! Staff accounts
//!
//! Managers register and maintain employees; the role picks the permission
//! set at login. Employees are deactivated, never deleted, because orders
//! and cash sessions reference them.

use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use sqlx::SqlitePool;

use crate::db::models::EmployeeRow;
use crate::db::repository::RepoError;
use crate::db::repository::employee::{self, EmployeeChanges};
use crate::utils::ServiceResult;
use crate::utils::validation::{MAX_NAME_LEN, require_email, require_password, require_text};

fn employee_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::EmployeeNotFound, format!("Employee {id} not found"))
        .with_detail("employee_id", id)
}

fn email_taken(email: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeEmailExists,
        format!("Email {email} is already in use"),
    )
    .with_detail("email", email)
}

pub async fn list_employees(
    pool: &SqlitePool,
    include_inactive: bool,
) -> ServiceResult<Vec<EmployeeResponse>> {
    let rows = employee::list(pool, include_inactive).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_employee(pool: &SqlitePool, id: i64) -> ServiceResult<EmployeeResponse> {
    employee::find_by_id(pool, id)
        .await?
        .map(Into::into)
        .ok_or_else(|| employee_not_found(id).into())
}

/// Register an employee; the password is stored as an argon2 hash
pub async fn create_employee(
    pool: &SqlitePool,
    data: EmployeeCreate,
) -> ServiceResult<EmployeeResponse> {
    let name = require_text(&data.name, "name", MAX_NAME_LEN, ErrorCode::RequiredField)?;
    let email = require_email(&data.email)?;
    require_password(&data.password)?;

    let created = employee::create(
        pool,
        EmployeeCreate {
            name,
            email: email.clone(),
            password: data.password,
            role: data.role,
        },
    )
    .await;
    let row = match created {
        Ok(row) => row,
        Err(RepoError::Duplicate(_)) => return Err(email_taken(&email).into()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(employee_id = row.id, email = %row.email, role = %row.role, "Employee created");
    Ok(row.into())
}

/// Change an employee's details, role, password or active flag.
///
/// `operator_id` may not demote or deactivate their own account.
pub async fn update_employee(
    pool: &SqlitePool,
    id: i64,
    data: EmployeeUpdate,
    operator_id: i64,
) -> ServiceResult<EmployeeResponse> {
    let current = employee::find_by_id(pool, id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;
    if id == operator_id {
        ensure_not_locking_out(&current, &data)?;
    }

    let name = match &data.name {
        Some(name) => Some(require_text(name, "name", MAX_NAME_LEN, ErrorCode::RequiredField)?),
        None => None,
    };
    let email = match &data.email {
        Some(email) => Some(require_email(email)?),
        None => None,
    };
    let password_hash = match &data.password {
        Some(password) => {
            require_password(password)?;
            let hash = EmployeeRow::hash_password(password)
                .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
            Some(hash)
        }
        None => None,
    };

    let changes = EmployeeChanges {
        name,
        email: email.clone(),
        password_hash,
        role: data.role,
        is_active: data.is_active,
    };
    let row = match employee::update(pool, id, changes).await {
        Ok(Some(row)) => row,
        Ok(None) => return Err(employee_not_found(id).into()),
        Err(RepoError::Duplicate(_)) => {
            return Err(email_taken(email.as_deref().unwrap_or_default()).into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(employee_id = row.id, role = %row.role, active = row.is_active, "Employee updated");
    Ok(row.into())
}

/// Disable login for an employee; history stays attached to the row
pub async fn deactivate_employee(
    pool: &SqlitePool,
    id: i64,
    operator_id: i64,
) -> ServiceResult<EmployeeResponse> {
    if id == operator_id {
        return Err(AppError::invalid_request("You cannot deactivate your own account")
            .with_detail("employee_id", id)
            .into());
    }
    let row = employee::deactivate(pool, id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    tracing::info!(employee_id = row.id, "Employee deactivated");
    Ok(row.into())
}

fn ensure_not_locking_out(current: &EmployeeRow, data: &EmployeeUpdate) -> Result<(), AppError> {
    if data.is_active == Some(false) {
        return Err(AppError::invalid_request("You cannot deactivate your own account")
            .with_detail("employee_id", current.id));
    }
    if let Some(role) = data.role
        && role != current.role
    {
        return Err(AppError::invalid_request("You cannot change your own role")
            .with_detail("employee_id", current.id));
    }
    Ok(())
}
