//! Retail Server - sales orders, payments and cash register for a small shop
//!
//! # Modules
//!
//! ```text
//! retail-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # JWT, permissions, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool, rows, repositories
//! ├── sales/         # order lifecycle, items, payments
//! ├── cash.rs        # cash sessions and movements
//! ├── employees.rs   # staff accounts
//! ├── inventory.rs   # products and stock
//! ├── reports.rs     # order detail, client statements, sales by period
//! └── utils/         # service errors, validation, logging
//! ```
//!
//! Every multi-step operation runs in one SQLite transaction; see [`sales`].

pub mod api;
pub mod auth;
pub mod cash;
pub mod core;
pub mod db;
pub mod employees;
pub mod inventory;
pub mod reports;
pub mod sales;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Audit event on the `audit` target (written to `logs/audit`).
///
/// ```ignore
/// audit_log!("order.cancelled", "order", order_number, operator_id = user.id);
/// ```
#[macro_export]
macro_rules! audit_log {
    ($action:expr, $resource:expr, $resource_id:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = $resource,
            resource_id = %$resource_id
            $(, $key = %$value)*
        );
    };
}

/// Security event on the `security` target (written to `logs/security`)
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::warn!(
            target: "security",
            level = $level,
            event = $event
            $(, $key = %$value)*
        );
    };
}

/// Load `.env` and start logging (console, plus files under `$WORK_DIR/logs`)
pub fn setup_environment() -> std::io::Result<()> {
    let _ = dotenv::dotenv();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
    let log_dir = std::path::Path::new(&work_dir).join("logs");
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_JSON")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false);

    init_logger_with_file(&level, json, log_dir.to_str())
}

pub fn print_banner() {
    println!(
        r#"
    ____       __        _ __
   / __ \___  / /_____ _(_) /
  / /_/ / _ \/ __/ __ `/ / /
 / _, _/  __/ /_/ /_/ / / /
/_/ |_|\___/\__/\__,_/_/_/
        "#
    );
}
