//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod question;
pub mod results;
pub mod start;

pub use question::QuestionScreen;
pub use results::{ResultAction, ResultsScreen};
pub use start::{StartAction, StartScreen};
