//! Tracing subscriber setup
//!
//! The TUI owns stdout, so log lines go to a file under the user cache
//! directory. `RUST_LOG` takes precedence over the requested level.

use crate::{QuizError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file location: $CACHE_HOME/tickquiz/tickquiz.log
pub fn log_file_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().ok_or_else(|| {
        QuizError::LoggingError("Unable to determine cache directory".to_string())
    })?;

    Ok(cache_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the level filter, preferring `RUST_LOG` when it is set
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level).map_err(|e| {
            QuizError::LoggingError(format!("Invalid log level '{}': {}", default_level, e))
        }),
    }
}

/// Install the global subscriber, appending to `path`
pub fn init(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            QuizError::LoggingError(format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            QuizError::LoggingError(format!("Failed to open log file {}: {}", path.display(), e))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| QuizError::LoggingError(format!("Failed to install subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let path = log_file_path().unwrap();
        assert!(path.to_string_lossy().ends_with("tickquiz.log"));
    }

    #[test]
    fn test_env_filter_accepts_level_names() {
        for level in ["error", "warn", "info", "debug", "trace", "tickquiz=debug"] {
            assert!(env_filter(level).is_ok());
        }
    }
}
