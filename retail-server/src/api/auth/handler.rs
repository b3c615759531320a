//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::auth::permissions::get_default_permissions;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::{audit_log, security_log};

use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay before answering, so response time does not reveal whether
/// the email exists
const AUTH_FIXED_DELAY_MS: u64 = 300;

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    let found = employee::find_by_email(&state.pool, &email)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error for unknown email and wrong password
    let employee = match found {
        Some(e) => {
            let password_valid = e
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
            if !password_valid {
                security_log!("WARN", "login_failed", email = email, reason = "invalid_password");
                return Err(AppError::invalid_credentials());
            }
            if !e.is_active {
                security_log!("WARN", "login_failed", email = email, reason = "account_disabled");
                return Err(AppError::new(shared::error::ErrorCode::AccountDisabled));
            }
            e
        }
        None => {
            security_log!("WARN", "login_failed", email = email, reason = "unknown_email");
            return Err(AppError::invalid_credentials());
        }
    };

    let permissions = get_default_permissions(employee.role);
    let token = state
        .jwt_service
        .generate_token(
            employee.id,
            &employee.email,
            &employee.name,
            employee.role,
            &permissions,
        )
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    audit_log!(
        "auth.login",
        "employee",
        employee.id,
        role = employee.role
    );

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            role: employee.role,
            permissions,
        },
    }))
}

/// GET /api/auth/me
pub async fn me(user: CurrentUser) -> Json<UserInfo> {
    Json(UserInfo {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
        permissions: user.permissions,
    })
}
