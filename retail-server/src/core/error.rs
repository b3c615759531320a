use thiserror::Error;

/// Startup and lifecycle errors. Request handling uses `AppError` instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ServerError {
    fn from(e: sqlx::Error) -> Self {
        ServerError::Database(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ServerError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        ServerError::Database(format!("migration failed: {e}"))
    }
}

impl From<crate::db::repository::RepoError> for ServerError {
    fn from(e: crate::db::repository::RepoError) -> Self {
        ServerError::Database(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
