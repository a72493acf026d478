//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and the event loop that drives a quiz session.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{App, Controller, Pending};
pub use screens::{QuestionScreen, ResultAction, ResultsScreen, StartAction, StartScreen};
pub use state::{AppState, NavigationAction, StateManager};
pub use tui::Tui;
