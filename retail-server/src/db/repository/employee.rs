//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::models::EmployeeRow;
use crate::db::models::employee::EMPLOYEE_COLUMNS;
use shared::models::{EmployeeCreate, EmployeeRole};
use sqlx::SqliteExecutor;

pub async fn find_by_id(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<EmployeeRow>> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = ?");
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(id)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

pub async fn find_by_email(
    ex: impl SqliteExecutor<'_>,
    email: &str,
) -> RepoResult<Option<EmployeeRow>> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(email.trim().to_lowercase())
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

pub async fn count(ex: impl SqliteExecutor<'_>) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(ex)
        .await?;
    Ok(count)
}

/// Create an employee, hashing the password with argon2
pub async fn create(ex: impl SqliteExecutor<'_>, data: EmployeeCreate) -> RepoResult<EmployeeRow> {
    let password_hash = EmployeeRow::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
    let now = shared::util::now_millis();
    let sql = format!(
        "INSERT INTO employee (id, name, email, password_hash, role, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6) RETURNING {EMPLOYEE_COLUMNS}"
    );
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(shared::util::snowflake_id())
        .bind(data.name.trim())
        .bind(data.email.trim().to_lowercase())
        .bind(password_hash)
        .bind(data.role)
        .bind(now)
        .fetch_one(ex)
        .await?;
    Ok(row)
}

/// Every employee by name; inactive ones only when asked
pub async fn list(ex: impl SqliteExecutor<'_>, include_inactive: bool) -> RepoResult<Vec<EmployeeRow>> {
    let sql = format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE ?1 OR is_active = 1 ORDER BY name, id"
    );
    let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(include_inactive)
        .fetch_all(ex)
        .await?;
    Ok(rows)
}

/// Field changes for [`update`]; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<EmployeeRole>,
    pub is_active: Option<bool>,
}

/// Returns `None` when the employee does not exist
pub async fn update(
    ex: impl SqliteExecutor<'_>,
    id: i64,
    changes: EmployeeChanges,
) -> RepoResult<Option<EmployeeRow>> {
    let sql = format!(
        "UPDATE employee SET name = COALESCE(?1, name), email = COALESCE(?2, email), password_hash = COALESCE(?3, password_hash), role = COALESCE(?4, role), is_active = COALESCE(?5, is_active), updated_at = ?6 WHERE id = ?7 RETURNING {EMPLOYEE_COLUMNS}"
    );
    let row = sqlx::query_as::<_, EmployeeRow>(&sql)
        .bind(changes.name)
        .bind(changes.email.map(|e| e.trim().to_lowercase()))
        .bind(changes.password_hash)
        .bind(changes.role)
        .bind(changes.is_active)
        .bind(shared::util::now_millis())
        .bind(id)
        .fetch_optional(ex)
        .await?;
    Ok(row)
}

/// Soft delete: orders and cash sessions keep referencing the row
pub async fn deactivate(ex: impl SqliteExecutor<'_>, id: i64) -> RepoResult<Option<EmployeeRow>> {
    update(
        ex,
        id,
        EmployeeChanges {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
}
