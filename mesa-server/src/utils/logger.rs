//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.
//! `RUST_LOG` takes precedence over the configured level when set.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional daily rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "mesa-server");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    // try_init: tests may initialize more than once
    let _ = subscriber.try_init();
}
