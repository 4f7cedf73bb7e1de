//! Logging Infrastructure
//!
//! `tracing` subscriber setup: stdout by default, daily rolling file when a
//! log directory is given. `RUST_LOG` wins over the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional level, JSON output and file output
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("employee_server={level},tower_http={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let json = json.unwrap_or(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "employee-server");
            let builder = builder.with_writer(file_appender).with_ansi(false);
            let result = if json {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            if let Err(e) = result {
                eprintln!("Logger already initialized: {e}");
            }
            return;
        }
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
