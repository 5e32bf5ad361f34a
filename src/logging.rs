//! Tracing setup
//!
//! Logs go to a daily file under `<cache_dir>/recipe-library/logs/` so they never
//! draw over the interactive screen. `RUST_LOG` takes priority over `--debug`.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("recipe-library").join("logs"))
}

fn default_filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }))
}

/// Install the global subscriber. The returned guard must live until exit.
pub fn init_tracing(debug: bool) -> Option<WorkerGuard> {
    let log_dir = log_dir()?;

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "recipe-library.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(default_filter(debug))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact(),
        )
        .try_init()
        .ok();

    Some(guard)
}
