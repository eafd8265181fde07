use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `tasklist=debug`)
pub const LOG_ENV: &str = "TASKLIST_LOG";

/// Log file location. The terminal belongs to the TUI, so logs go to a file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("tasklist.log")
}

/// Install a file-backed subscriber when `TASKLIST_LOG` is set.
/// Returns the log path when logging was enabled.
pub fn init() -> Option<PathBuf> {
    let filter = std::env::var(LOG_ENV).ok()?;
    let path = log_path();
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: could not open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    match result {
        Ok(()) => Some(path),
        Err(_) => None,
    }
}
