use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::ServerError;

/// Bootstrap account created when the employee table is empty
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | $WORK_DIR/database/retail.db | SQLite file |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default tracing filter |
/// | LOG_JSON | false | JSON formatted logs |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
/// | ADMIN_EMAIL / ADMIN_PASSWORD / ADMIN_NAME | - | First manager account |
/// | JWT_SECRET, JWT_EXPIRATION_MINUTES, JWT_ISSUER, JWT_AUDIENCE | - | See [`JwtConfig`] |
///
/// ```ignore
/// WORK_DIR=/srv/loja HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub database_path: PathBuf,
    pub http_port: u16,
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub request_timeout_ms: u64,
    pub admin: Option<AdminBootstrap>,
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ServerError> {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&work_dir).join("database").join("retail.db"));

        let admin = match (
            std::env::var("ADMIN_EMAIL").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Some(AdminBootstrap {
                    email,
                    password,
                    name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Manager".into()),
                })
            }
            _ => None,
        };

        let jwt = JwtConfig::from_env().map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            work_dir,
            database_path,
            http_port: env_parse("HTTP_PORT", 3000),
            jwt,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30_000),
            admin,
        })
    }

    /// Configuration rooted at `work_dir`, used by tests and embedded runs
    pub fn with_work_dir(work_dir: impl Into<String>, jwt: JwtConfig) -> Self {
        let work_dir = work_dir.into();
        Self {
            database_path: PathBuf::from(&work_dir).join("database").join("retail.db"),
            work_dir,
            http_port: 0,
            jwt,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            request_timeout_ms: 30_000,
            admin: None,
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
