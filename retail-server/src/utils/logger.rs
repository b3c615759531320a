//! Logging Infrastructure
//!
//! - Console output (pretty in development, JSON when `LOG_JSON=true`)
//! - Daily rotating application logs under `logs/app` (deleted after 14 days)
//! - Permanent audit logs under `logs/audit` (target `audit`)
//! - Permanent security logs under `logs/security` (target `security`)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, filter, fmt, prelude::*};

/// Days an application log file is kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

const AUDIT_TARGET: &str = "audit";
const SECURITY_TARGET: &str = "security";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn fmt_layer<W>(writer: W, json: bool, ansi: bool) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    if json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()
    }
}

/// Date encoded in an `app.YYYY-MM-DD` file name
fn app_log_date(name: &str) -> Option<chrono::NaiveDate> {
    let date_part = name.strip_prefix("app.")?;
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Delete application log files older than [`APP_LOG_RETENTION_DAYS`].
///
/// Audit and security logs are never touched.
pub fn cleanup_old_logs(log_dir: &Path) -> std::io::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = chrono::Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(date) = path.file_name().and_then(|n| n.to_str()).and_then(app_log_date) else {
            continue;
        };
        if date < cutoff {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

async fn periodic_cleanup(log_dir: PathBuf) {
    let mut interval = tokio::time::interval(Duration::from_secs(24 * 60 * 60));
    loop {
        interval.tick().await;
        match cleanup_old_logs(&log_dir) {
            Ok(0) => {}
            Ok(n) => tracing::info!(removed = n, "Deleted old application log files"),
            Err(e) => tracing::warn!(error = %e, "Log cleanup failed"),
        }
    }
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - default filter (e.g. "info"); `RUST_LOG` takes precedence on the console
/// * `json_format` - JSON output instead of the pretty format
/// * `log_dir` - enables the rotating app/audit/security files
///
/// ```no_run
/// // development (console only)
/// retail_server::init_logger_with_file("debug", false, None)?;
/// // production (console + files)
/// retail_server::init_logger_with_file("info", true, Some("./data/logs"))?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> std::io::Result<()> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let mut layers: Vec<BoxedLayer> =
        vec![fmt_layer(std::io::stdout, json_format, true).with_filter(console_filter).boxed()];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join("app");
        let audit_log_dir = log_dir.join("audit");
        let security_log_dir = log_dir.join("security");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&audit_log_dir)?;
        fs::create_dir_all(&security_log_dir)?;

        let max_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);

        // Everything except audit/security
        let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
        layers.push(
            fmt_layer(app_log, json_format, false)
                .with_filter(filter::filter_fn(move |meta| {
                    *meta.level() <= max_level
                        && meta.target() != AUDIT_TARGET
                        && meta.target() != SECURITY_TARGET
                }))
                .boxed(),
        );

        let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_log_dir, AUDIT_TARGET);
        layers.push(
            fmt_layer(audit_log, true, false)
                .with_filter(filter::filter_fn(|meta| meta.target() == AUDIT_TARGET))
                .boxed(),
        );

        let security_log =
            RollingFileAppender::new(Rotation::DAILY, security_log_dir, SECURITY_TARGET);
        layers.push(
            fmt_layer(security_log, true, false)
                .with_filter(filter::filter_fn(|meta| meta.target() == SECURITY_TARGET))
                .boxed(),
        );

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));
    }

    tracing_subscriber::registry().with(layers).init();
    Ok(())
}

/// Console-only logger
pub fn init_logger(level: &str) -> std::io::Result<()> {
    init_logger_with_file(level, false, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_app_log_dates() {
        assert_eq!(
            app_log_date("app.2026-03-01"),
            chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(app_log_date("audit.2026-03-01"), None);
        assert_eq!(app_log_date("app.latest"), None);
    }

    #[test]
    fn cleanup_removes_only_expired_app_logs() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join("app");
        fs::create_dir_all(&app_dir).unwrap();

        let old = chrono::Local::now().date_naive() - chrono::Duration::days(30);
        let today = chrono::Local::now().date_naive();
        let old_file = app_dir.join(format!("app.{}", old.format("%Y-%m-%d")));
        let new_file = app_dir.join(format!("app.{}", today.format("%Y-%m-%d")));
        fs::write(&old_file, "old").unwrap();
        fs::write(&new_file, "new").unwrap();

        assert_eq!(cleanup_old_logs(dir.path()).unwrap(), 1);
        assert!(!old_file.exists());
        assert!(new_file.exists());
    }
}
