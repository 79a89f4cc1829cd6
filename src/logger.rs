//! Logging setup shared by every entry point.

use tracing_subscriber::EnvFilter;

/// Initialize the logger. `RUST_LOG` wins over the default `info` level.
pub fn init_logger() {
    init_logger_with_level(None);
}

pub fn init_logger_with_level(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    // A second init (tests, repeated bootstrap) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
