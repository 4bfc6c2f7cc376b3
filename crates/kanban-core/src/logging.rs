//! Tracing subscriber setup.
//!
//! Logs go to stderr at the configured filter level. Setting
//! `KANBAN_DEBUG_LOG=<path>` redirects everything at debug level into that
//! file instead, which is the only practical way to watch a board that owns
//! the terminal.

use crate::AppConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEBUG_LOG_ENV: &str = "KANBAN_DEBUG_LOG";

/// Install the global subscriber. Returns false if one was already set.
pub fn init(config: &AppConfig) -> bool {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        match OpenOptions::new().create(true).append(true).open(&log_path) {
            Ok(log_file) => {
                return tracing_subscriber::fmt()
                    .with_writer(Mutex::new(log_file))
                    .with_max_level(tracing::Level::DEBUG)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .try_init()
                    .is_ok();
            }
            Err(e) => {
                eprintln!("Cannot open {} ({}), logging to stderr", log_path, e);
            }
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
