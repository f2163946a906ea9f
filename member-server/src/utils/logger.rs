//! Logging Infrastructure
//!
//! Structured logging setup for development (human-readable) and production (JSON).
//! `RUST_LOG` takes precedence over the configured level.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// When `log_dir` is given and exists, output goes to a daily rolling file
/// `member-server.YYYY-MM-DD` in that directory instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            Some(tracing_appender::rolling::daily(log_path, "member-server"))
        } else {
            eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
            None
        }
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    match (json, file_appender) {
        (true, Some(writer)) => builder.json().with_writer(writer).init(),
        (true, None) => builder.json().init(),
        (false, Some(writer)) => builder.with_ansi(false).with_writer(writer).init(),
        (false, None) => builder.init(),
    }
}

/// 未设置 `RUST_LOG` 时的过滤规则
///
/// 包含 `shared`: 系统错误的详细信息由 `AppError` 在那里记录。
pub fn default_filter(level: &str) -> String {
    format!("member_server={level},shared={level},tower_http={level}")
}
