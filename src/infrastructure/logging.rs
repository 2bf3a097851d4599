//! Tracing setup

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// With a log file, events are appended there. Without one no writer is
/// installed: the terminal belongs to the UI.
pub fn init_tracing(log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let Some(path) = log_file else {
        let _ = tracing_subscriber::registry().with(env_filter).try_init();
        return;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Failed to create log dir {}: {}", parent.display(), e);
        }
    }

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .try_init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            let _ = tracing_subscriber::registry().with(env_filter).try_init();
        }
    }
}
