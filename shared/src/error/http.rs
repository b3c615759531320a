//! Failure kinds and their HTTP status mapping

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Coarse failure taxonomy shared by every operation.
///
/// Codes carry the precise reason; the kind decides how callers react.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Success,
    NotFound,
    /// The entity exists but its status forbids the operation
    InvalidState,
    InvalidInput,
    InsufficientStock,
    Conflict,
    Unauthorized,
    Forbidden,
    Internal,
}

impl ErrorCode {
    /// Classify this code into its failure kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Success => ErrorKind::Success,

            Self::NotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::CashSessionNotFound
            | Self::EmployeeNotFound
            | Self::ClientHasNoOpenOrders => ErrorKind::NotFound,

            Self::OrderNotOpen
            | Self::OrderNotCompleted
            | Self::OrderEmpty
            | Self::OrderAlreadyClosed
            | Self::OrderCancelRequiresUnlock
            | Self::CashSessionAlreadyOpen
            | Self::NoOpenCashSession
            | Self::CashSessionClosed => ErrorKind::InvalidState,

            Self::InsufficientStock => ErrorKind::InsufficientStock,

            Self::AlreadyExists | Self::ProductAlreadyExists | Self::EmployeeEmailExists => {
                ErrorKind::Conflict
            }

            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::AccountDisabled => ErrorKind::Unauthorized,

            Self::PermissionDenied => ErrorKind::Forbidden,

            Self::InternalError | Self::DatabaseError => ErrorKind::Internal,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::OrderItemsRequired
            | Self::InvalidQuantity
            | Self::DimensionsRequired
            | Self::TotalBelowPaid
            | Self::ReasonRequired
            | Self::ClientNameRequired
            | Self::PaymentInvalidAmount
            | Self::PaymentMethodRequired
            | Self::PaymentExceedsBalance
            | Self::ProductInvalidPrice
            | Self::ProductNotStocked
            | Self::CashMovementInvalidAmount => ErrorKind::InvalidInput,
        }
    }

    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        self.kind().http_status()
    }
}

impl ErrorKind {
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidState | Self::InsufficientStock | Self::Conflict => StatusCode::CONFLICT,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ErrorCode::OrderNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ErrorCode::OrderNotOpen.kind(), ErrorKind::InvalidState);
        assert_eq!(
            ErrorCode::CashSessionAlreadyOpen.kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(ErrorCode::InvalidQuantity.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            ErrorCode::InsufficientStock.kind(),
            ErrorKind::InsufficientStock
        );
        assert_eq!(ErrorCode::ProductAlreadyExists.kind(), ErrorKind::Conflict);
        assert_eq!(ErrorCode::DatabaseError.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderEmpty.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::DimensionsRequired.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::TokenExpired.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::PermissionDenied.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
