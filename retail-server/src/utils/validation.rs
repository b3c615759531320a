//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::money;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, client, employee
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, reasons
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: product code, payment method
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum quantity on a single line
pub const MAX_QUANTITY: i64 = 9999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a required string and return it trimmed.
///
/// Blank input fails with `code`; overlong input fails with `ValidationFailed`.
pub fn require_text(
    value: &str,
    field: &str,
    max_len: usize,
    code: ErrorCode,
) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::with_message(code, format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            trimmed.len()
        ))
        .with_detail("field", field));
    }
    Ok(trimmed.to_string())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an email address and return it trimmed and lowercased
pub fn require_email(value: &str) -> Result<String, AppError> {
    let email = require_text(value, "email", MAX_EMAIL_LEN, ErrorCode::RequiredField)?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.contains('@') => {
            Ok(email)
        }
        _ => Err(AppError::validation(format!("Invalid email address: {email}"))
            .with_detail("field", "email")),
    }
}

/// Passwords are taken as typed, without trimming
pub fn require_password(value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(AppError::validation(format!(
            "password must be {MIN_PASSWORD_LEN} to {MAX_PASSWORD_LEN} characters"
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

/// Validate a strictly positive amount and convert it to cents
pub fn require_amount(value: Decimal, code: ErrorCode) -> Result<i64, AppError> {
    let rounded = money::round_money(value);
    if !money::is_valid_amount(rounded) {
        return Err(AppError::new(code).with_detail("amount", value.to_string()));
    }
    money::to_cents(rounded).ok_or_else(|| AppError::new(code))
}
