//! Tracing setup for the two run modes.
//!
//! The interactive UI owns the terminal, so it only logs to a file and only
//! when asked to. One-shot mode logs warnings to stderr.

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Names the log file base path for the interactive UI.
pub const LOG_PATH_ENV: &str = "LINKSHRINK_LOG";

/// `RUST_LOG` when set, `fallback` otherwise.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// `{base}.{timestamp}.{pid}`, one file per process.
fn session_log_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{timestamp}.{pid}"))
}

/// File logging for the interactive UI.
///
/// Does nothing unless [`LOG_PATH_ENV`] is set. Returns the file actually
/// written, which carries a per-session suffix.
pub fn init_file_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_PATH_ENV).ok().filter(|v| !v.is_empty())?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = session_log_path(&base, timestamp, std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(file_layer)
        .init();

    tracing::info!(
        path = %path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "linkshrink logging started"
    );
    Some(path)
}

/// Stderr logging for one-shot mode. Quiet by default.
pub fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(UtcTime::rfc_3339())
        .init();
}
