//! Service-layer error type
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`, [`RepoError`]) and
//! the API-layer [`AppError`], so services can use `?` on both.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode, ErrorKind};

use crate::db::repository::RepoError;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// - `Db`: database/infrastructure errors (logged, surfaced as `InternalError`)
/// - `App`: business-rule errors (passed through to the caller)
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Db(_) => ErrorKind::Internal,
            ServiceError::App(e) => e.kind(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Db(_) => ErrorCode::InternalError,
            ServiceError::App(e) => e.code,
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Db(e) => write!(f, "database error: {e}"),
            ServiceError::App(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<RepoError> for ServiceError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => ServiceError::App(AppError::not_found(msg)),
            RepoError::Duplicate(msg) => ServiceError::App(AppError::conflict(msg)),
            RepoError::Validation(msg) => ServiceError::App(AppError::validation(msg)),
            RepoError::Database(msg) => ServiceError::Db(msg.into()),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_error_mapping() {
        let err: ServiceError = RepoError::Duplicate("code".into()).into();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err: ServiceError = RepoError::Database("disk I/O".into()).into();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.message, "Internal server error");
    }

    #[test]
    fn test_app_error_passthrough() {
        let err: ServiceError = AppError::new(ErrorCode::OrderNotOpen).into();
        assert_eq!(err.code(), ErrorCode::OrderNotOpen);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }
}
