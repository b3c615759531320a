//! Unified error codes for the retail backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Product / inventory errors
//! - 7xxx: Cash session errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order is not open for editing or payment
    OrderNotOpen = 4002,
    /// Order is not completed
    OrderNotCompleted = 4003,
    /// Order has no line items
    OrderEmpty = 4004,
    /// Order is already cancelled or reversed
    OrderAlreadyClosed = 4005,
    /// Item set is empty
    OrderItemsRequired = 4006,
    /// Item quantity must be positive
    InvalidQuantity = 4007,
    /// Made-to-order item is missing width or height
    DimensionsRequired = 4008,
    /// New total would fall below the amount already paid
    TotalBelowPaid = 4009,
    /// Completed order without payments must be unlocked before cancelling
    OrderCancelRequiresUnlock = 4010,
    /// Reason is required
    ReasonRequired = 4011,
    /// Client name is required
    ClientNameRequired = 4012,

    // ==================== 5xxx: Payment ====================
    /// Payment amount must be positive
    PaymentInvalidAmount = 5001,
    /// Payment method is required
    PaymentMethodRequired = 5002,
    /// Payment exceeds the outstanding balance
    PaymentExceedsBalance = 5003,
    /// Client has no open orders
    ClientHasNoOpenOrders = 5004,

    // ==================== 6xxx: Product / Inventory ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Not enough stock
    InsufficientStock = 6002,
    /// Product code or name already in use
    ProductAlreadyExists = 6003,
    /// Product price is invalid
    ProductInvalidPrice = 6004,
    /// Made-to-order products cannot hold stock
    ProductNotStocked = 6005,

    // ==================== 7xxx: Cash session ====================
    /// Cash session not found
    CashSessionNotFound = 7001,
    /// A cash session is already open
    CashSessionAlreadyOpen = 7002,
    /// No cash session is open
    NoOpenCashSession = 7003,
    /// Cash session is already closed
    CashSessionClosed = 7004,
    /// Cash movement amount must be positive
    CashMovementInvalidAmount = 7005,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Email already in use
    EmployeeEmailExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Default English message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field is missing",
            Self::ValueOutOfRange => "Value is out of range",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Token is invalid",
            Self::AccountDisabled => "Account is disabled",

            Self::PermissionDenied => "Permission denied",

            Self::OrderNotFound => "Order not found",
            Self::OrderNotOpen => "Order is not open",
            Self::OrderNotCompleted => "Order is not completed",
            Self::OrderEmpty => "Order has no items",
            Self::OrderAlreadyClosed => "Order is already cancelled or reversed",
            Self::OrderItemsRequired => "At least one item is required",
            Self::InvalidQuantity => "Quantity must be greater than zero",
            Self::DimensionsRequired => "Width and height are required for made-to-order items",
            Self::TotalBelowPaid => "Order total cannot fall below the amount already paid",
            Self::OrderCancelRequiresUnlock => "Completed order must be unlocked before cancelling",
            Self::ReasonRequired => "Reason is required",
            Self::ClientNameRequired => "Client name is required",

            Self::PaymentInvalidAmount => "Payment amount must be greater than zero",
            Self::PaymentMethodRequired => "Payment method is required",
            Self::PaymentExceedsBalance => "Payment exceeds the outstanding balance",
            Self::ClientHasNoOpenOrders => "Client has no open orders",

            Self::ProductNotFound => "Product not found",
            Self::InsufficientStock => "Insufficient stock",
            Self::ProductAlreadyExists => "Product code or name already exists",
            Self::ProductInvalidPrice => "Product price is invalid",
            Self::ProductNotStocked => "Product is made to order and holds no stock",

            Self::CashSessionNotFound => "Cash session not found",
            Self::CashSessionAlreadyOpen => "A cash session is already open",
            Self::NoOpenCashSession => "No cash session is open",
            Self::CashSessionClosed => "Cash session is already closed",
            Self::CashMovementInvalidAmount => "Cash movement amount must be greater than zero",

            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeEmailExists => "Email already in use",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderNotOpen),
            4003 => Ok(ErrorCode::OrderNotCompleted),
            4004 => Ok(ErrorCode::OrderEmpty),
            4005 => Ok(ErrorCode::OrderAlreadyClosed),
            4006 => Ok(ErrorCode::OrderItemsRequired),
            4007 => Ok(ErrorCode::InvalidQuantity),
            4008 => Ok(ErrorCode::DimensionsRequired),
            4009 => Ok(ErrorCode::TotalBelowPaid),
            4010 => Ok(ErrorCode::OrderCancelRequiresUnlock),
            4011 => Ok(ErrorCode::ReasonRequired),
            4012 => Ok(ErrorCode::ClientNameRequired),

            // Payment
            5001 => Ok(ErrorCode::PaymentInvalidAmount),
            5002 => Ok(ErrorCode::PaymentMethodRequired),
            5003 => Ok(ErrorCode::PaymentExceedsBalance),
            5004 => Ok(ErrorCode::ClientHasNoOpenOrders),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::InsufficientStock),
            6003 => Ok(ErrorCode::ProductAlreadyExists),
            6004 => Ok(ErrorCode::ProductInvalidPrice),
            6005 => Ok(ErrorCode::ProductNotStocked),

            // Cash session
            7001 => Ok(ErrorCode::CashSessionNotFound),
            7002 => Ok(ErrorCode::CashSessionAlreadyOpen),
            7003 => Ok(ErrorCode::NoOpenCashSession),
            7004 => Ok(ErrorCode::CashSessionClosed),
            7005 => Ok(ErrorCode::CashMovementInvalidAmount),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::InvalidCredentials.code(), 1002);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::OrderNotOpen.code(), 4002);
        assert_eq!(ErrorCode::PaymentExceedsBalance.code(), 5003);
        assert_eq!(ErrorCode::InsufficientStock.code(), 6002);
        assert_eq!(ErrorCode::CashSessionAlreadyOpen.code(), 7002);
        assert_eq!(ErrorCode::EmployeeNotFound.code(), 8001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_matches_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::TokenInvalid,
            ErrorCode::OrderCancelRequiresUnlock,
            ErrorCode::ClientHasNoOpenOrders,
            ErrorCode::ProductNotStocked,
            ErrorCode::CashMovementInvalidAmount,
            ErrorCode::EmployeeEmailExists,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3001), Err(InvalidErrorCode(3001)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
        // Retired codes
        for retired in [1, 2002, 5005, 9101] {
            assert_eq!(ErrorCode::try_from(retired), Err(InvalidErrorCode(retired)));
        }
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InsufficientStock).unwrap();
        assert_eq!(json, "6002");

        let code: ErrorCode = serde_json::from_str("7003").unwrap();
        assert_eq!(code, ErrorCode::NoOpenCashSession);

        assert!(serde_json::from_str::<ErrorCode>("4999").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::OrderNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_invalid_error_code_display() {
        assert_eq!(InvalidErrorCode(42).to_string(), "invalid error code: 42");
    }
}
