use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::employee;
use shared::models::{EmployeeCreate, EmployeeRole};

/// Shared application state, cloned into every handler
///
/// ```ignore
/// async fn handler(State(state): State<ServerState>) {
///     let order = order::find_by_number(&state.pool, 7).await?;
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    /// SQLite pool (WAL)
    pub pool: SqlitePool,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Create the work directory, open the database and build the services.
    ///
    /// Initialization order:
    /// 1. Work directory (and the database file's parent)
    /// 2. Database with migrations
    /// 3. JWT service
    /// 4. Bootstrap manager account when no employee exists yet
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;
        if let Some(parent) = config.database_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = DbService::new(&config.database_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.message))?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let state = Self::new(config.clone(), db.pool, jwt_service);

        state.bootstrap_admin().await?;
        Ok(state)
    }

    /// Seed the first manager from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
    async fn bootstrap_admin(&self) -> Result<()> {
        if employee::count(&self.pool).await? > 0 {
            return Ok(());
        }
        let Some(admin) = &self.config.admin else {
            tracing::warn!("No employees exist and ADMIN_EMAIL/ADMIN_PASSWORD are not set; nobody can log in");
            return Ok(());
        };

        let created = employee::create(
            &self.pool,
            EmployeeCreate {
                name: admin.name.clone(),
                email: admin.email.clone(),
                password: admin.password.clone(),
                role: EmployeeRole::Manager,
            },
        )
        .await?;
        tracing::info!(employee_id = created.id, email = %created.email, "Bootstrap manager account created");
        Ok(())
    }

    pub fn work_dir(&self) -> &Path {
        Path::new(&self.config.work_dir)
    }
}
