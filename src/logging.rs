//! Tracing subscriber setup.
//!
//! The CLI logs to stderr so stdout stays clean for reports and pipes.
//! The TUI owns the terminal, so it only logs when `RUST_LOG` is set, and
//! then to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

/// Log file used by the TUI when `RUST_LOG` is set.
pub const TUI_LOG_FILE: &str = "garch.log";

/// Install a stderr subscriber. Repeated calls are ignored.
pub fn init_stderr() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Install a file subscriber for the TUI, only when `RUST_LOG` is set.
///
/// Returns the log path when logging was enabled.
pub fn init_for_tui(path: &Path) -> Result<Option<&Path>, AppError> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(None);
    };

    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create log file {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok();

    Ok(Some(path))
}
