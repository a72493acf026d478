//! tickquiz - timed multiple-choice quiz
//!
//! A terminal quiz that presents a fixed sequence of questions, collects one
//! answer per question (by key press or countdown expiry), keeps a running
//! score and classifies the final result.

use std::fmt;
use std::time::Duration;

pub mod app;
pub mod config;
pub mod logging;
pub mod quiz;
pub mod simple;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// Caller passed a value outside the accepted domain
    InvalidArgument(String),
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log file or subscriber setup error
    LoggingError(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuizError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error handling utilities
pub mod error {
    use super::QuizError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::InvalidArgument(msg) => {
                format!("{}. Pick one of the listed answers.", msg)
            }
            QuizError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::TuiError(_) => {
                "The terminal could not be set up. Try running with --simple.".to_string()
            }
            QuizError::LoggingError(_) => {
                "Failed to open the log file. Check disk space and permissions.".to_string()
            }
            QuizError::IoError(_) => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "tickquiz";
pub const CONFIG_FILE: &str = "tickquiz.toml";
pub const LOG_FILE: &str = "tickquiz.log";

/// Number of answer options every question carries
pub const ANSWERS_PER_QUESTION: usize = 4;
/// Default per-question countdown, in ticks
pub const DEFAULT_TIME_LIMIT: u32 = 10;
/// Length of one countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// How long answer feedback stays on screen before the next question
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1000);
/// Pause after the last question while the progress bar fills
pub const FINISH_DELAY: Duration = Duration::from_millis(500);
